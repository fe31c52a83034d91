use maud::{html, Markup};

/// Static page footer: a final divider and the full contact line again,
/// so the page closes the way it opens.
pub fn footer() -> Markup {
    html! {
        div class="row text-center mt-5 mb-5" {
            div class="col-12" {
                hr;
                p {
                    "Fabio Maffioletti • Milan, Italy • "
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
