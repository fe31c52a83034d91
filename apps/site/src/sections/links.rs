use maud::{html, Markup};

use crate::models::LinkItem;
use crate::sections::section;

/// "Personal projects and links": each item is an anchor labelled with its
/// title, followed by ": description". Links open in a new tab and carry
/// `rel="noopener noreferrer"` so the target page cannot reach the opener.
pub fn links(items: &[LinkItem]) -> Markup {
    html! {
        div class="row mt-5" {
            (section("Personal projects and links"))
            div class="col-12" {
                dl {
                    @for item in items {
                        dd {
                            a href=(item.href) target="_blank" rel="noopener noreferrer" {
                                (item.title)
                            }
                            ": " (item.description)
                        }
                    }
                }
            }
        }
    }
}
