use maud::{html, Markup};

/// Titled divider marking the start of a résumé section.
pub fn section(title: &str) -> Markup {
    html! {
        div class="col-12" {
            h2 { (title) }
            hr;
        }
    }
}

/// Variant used when a caller has no title to give. Kept separate so the
/// common path stays a plain `&str`.
#[allow(dead_code)]
pub fn section_or_default(title: Option<&str>) -> Markup {
    section(title.unwrap_or("Undefined"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_renders_heading_and_divider() {
        let markup = section("Summary").into_string();
        assert!(markup.contains("<h2>Summary</h2>"));
        assert!(markup.contains("<hr>"), "divider follows the heading");
    }

    #[test]
    fn test_section_escapes_title() {
        let markup = section("R&D <lead>").into_string();
        assert!(markup.contains("R&amp;D &lt;lead&gt;"));
    }

    #[test]
    fn test_missing_title_falls_back_to_undefined() {
        let markup = section_or_default(None).into_string();
        assert!(markup.contains("<h2>Undefined</h2>"));
    }
}
