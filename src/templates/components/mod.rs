use maud::{html, Markup};

/// One card-styled view section of the single-page app. Everything except
/// the login section starts hidden; app.js toggles visibility.
pub fn view_section(id: &str, hidden: bool, body: Markup) -> Markup {
    let class = if hidden { "card hidden" } else { "card" };
    html! {
        section id=(id) class=(class) {
            (body)
        }
    }
}
