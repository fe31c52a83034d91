use maud::{html, Markup};

use crate::models::EducationItem;
use crate::sections::section;

/// "Education and courses": a definition list with one entry per item,
/// formatted as "name – description, date".
pub fn education(items: &[EducationItem]) -> Markup {
    html! {
        div class="row mt-5" {
            (section("Education and courses"))
            div class="col-12" {
                dl {
                    @for item in items {
                        dd {
                            strong { (item.name) }
                            " – " (item.description) ", " (item.date)
                        }
                    }
                }
            }
        }
    }
}
