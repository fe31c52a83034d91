use maud::{html, Markup};

use crate::sections::section;

/// "Additional information": free-text lines rendered verbatim.
pub fn additional_info(items: &[String]) -> Markup {
    html! {
        div class="row mt-5" {
            (section("Additional information"))
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
