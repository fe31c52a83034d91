use maud::{html, Markup};

use crate::sections::section;

/// "Management and technical skills": each entry is an already
/// comma-joined line, rendered verbatim as its own list item.
pub fn skills(items: &[String]) -> Markup {
    html! {
        div class="row mt-5" {
            (section("Management and technical skills"))
            div class="col-12" {
                ul {
                    @for item in items {
                        li { (item) }
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
    fn test_skills_render_verbatim_in_order() {
        let items = vec!["People management".to_string(), "System design".to_string()];
        let markup = skills(&items).into_string();
        let first = markup.find("People management").expect("first line rendered");
        let second = markup.find("System design").expect("second line rendered");
        assert!(first < second, "skill lines keep input order");
        assert_eq!(markup.matches("<li>").count(), 2);
    }

    #[test]
    fn test_empty_skills_renders_header_with_empty_body() {
        let markup = skills(&[]).into_string();
        assert!(markup.contains("Management and technical skills"));
        assert!(markup.contains("<ul></ul>"));
    }
}
