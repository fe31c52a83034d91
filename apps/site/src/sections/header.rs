use maud::{html, Markup};

/// Static page header: name, location, contact links.
pub fn header() -> Markup {
    html! {
        div class="row text-center mt-5" {
            div class="col-12" {
                h1 { "Fabio Maffioletti" }
                p {
                    "Milan, Italy • "
                    a href="mailto:fabio.maffioletti@gmail.com" {
                        "fabio.maffioletti@gmail.com"
                    }
                    " • "
                    a href="https://www.linkedin.com/in/fabiomaffioletti/"
                        target="_blank"
                        rel="noopener noreferrer" {
                        "https://www.linkedin.com/in/fabiomaffioletti/"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_has_name_location_and_contacts() {
        let markup = header().into_string();
        assert!(markup.contains("<h1>Fabio Maffioletti</h1>"));
        assert!(markup.contains("Milan, Italy"));
        assert!(markup.contains(r#"href="mailto:fabio.maffioletti@gmail.com""#));
        assert!(markup.contains(r#"href="https://www.linkedin.com/in/fabiomaffioletti/""#));
    }

    #[test]
    fn test_profile_link_opens_in_new_tab_safely() {
        let markup = header().into_string();
        assert!(markup.contains(r#"target="_blank" rel="noopener noreferrer""#));
    }
}
