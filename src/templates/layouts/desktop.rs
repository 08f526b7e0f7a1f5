use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/styles.css";
            }
            body {
                div class="container" {
                    header {
                        h1 { (title) }
                        div id="user-info" {}
                    }

                    main {
                        (content)
                    }

                    footer {
                        small { "Demo — Smart Hostel Sentinel" }
                    }
                }
                script src="/app.js" {}
            }
        }
    }
}
