//! Composition root. Owns the fixed section order; every section receives
//! its slice of the curriculum explicitly.

use maud::{html, Markup, DOCTYPE};

use crate::models::Curriculum;
use crate::sections::{
    additional_info, companies, education, footer, header, links, skills, summary,
};

/// Renders the complete CV page. Section order is unconditional: header,
/// summary, experience, education, skills, links, additional info, footer.
pub fn render(curriculum: &Curriculum) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Fabio Maffioletti - CV" }
            }
            body {
                div class="container" {
                    (header())
                    (summary())
                    (companies(&curriculum.experience.companies))
                    (education(&curriculum.education))
                    (skills(&curriculum.skills))
                    (links(&curriculum.links))
                    (additional_info(&curriculum.additional_info))
                    (footer())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::models::{Company, Experience, Role};

    #[test]
    fn test_full_page_renders_sections_in_fixed_order() {
        let curriculum = data::curriculum();
        let markup = render(&curriculum).into_string();

        let positions: Vec<usize> = [
            "Fabio Maffioletti",
            "Summary",
            "Professional experience",
            "Education and courses",
            "Management and technical skills",
            "Personal projects and links",
            "Additional information",
            "Fabio Maffioletti • Milan, Italy",
        ]
        .iter()
        .map(|needle| {
            markup
                .find(*needle)
                .unwrap_or_else(|| panic!("section marker '{needle}' missing from page"))
        })
        .collect();

        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "section markers must appear in the fixed composition order"
        );
    }

    #[test]
    fn test_page_is_a_complete_html_document() {
        let curriculum = data::curriculum();
        let markup = render(&curriculum).into_string();
        assert!(markup.starts_with("<!DOCTYPE html>"));
        assert!(markup.contains(r#"<meta charset="utf-8">"#));
        assert!(markup.ends_with("</html>"));
    }

    #[test]
    fn test_sparse_curriculum_still_renders_every_section() {
        let curriculum = Curriculum {
            experience: Experience { companies: vec![] },
            education: vec![],
            skills: vec![],
            links: vec![],
            additional_info: vec![],
        };
        let markup = render(&curriculum).into_string();

        for heading in [
            "Summary",
            "Professional experience",
            "Education and courses",
            "Management and technical skills",
            "Personal projects and links",
            "Additional information",
        ] {
            assert!(markup.contains(heading), "empty data must not drop the '{heading}' section");
        }
    }

    #[test]
    fn test_experience_content_reaches_the_page() {
        let curriculum = Curriculum {
            experience: Experience {
                companies: vec![Company {
                    name: "Acme".to_string(),
                    roles: vec![Role {
                        name: "Eng".to_string(),
                        description: vec!["Did X".to_string()],
                        from: "2020".to_string(),
                        to: "2021".to_string(),
                    }],
                }],
            },
            education: vec![],
            skills: vec![],
            links: vec![],
            additional_info: vec![],
        };
        let markup = render(&curriculum).into_string();
        assert!(markup.contains("Acme"));
        assert!(markup.contains("Did X"));
    }
}
