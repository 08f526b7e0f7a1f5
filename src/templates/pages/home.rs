use maud::{html, Markup};

use crate::templates::{desktop_layout, view_section};

/// Shell for the single-page app. app.js drives which section is visible
/// and fills the grids from the JSON API.
pub fn home_page() -> Markup {
    desktop_layout(
        "Smart Hostel Sentinel",
        html! {
            (view_section("login-section", false, html! {
                h2 { "Login (demo)" }
                p {
                    "Use seeded usernames: "
                    code { "student1" } ", "
                    code { "student2" } ", "
                    code { "supervisor1" } ", "
                    code { "electrician1" }
                }
                input id="username" placeholder="username";
                select id="role" {
                    option value="student" { "student" }
                    option value="supervisor" { "supervisor" }
                    option value="electrician" { "electrician" }
                    option value="warden" { "warden" }
                    option value="caretaker" { "caretaker" }
                    option value="director" { "director" }
                }
                button id="btn-login" { "Login" }
            }))

            (view_section("supervisor-view", true, html! {
                h2 { "Supervisor: Blocks" }
                div id="blocks" class="grid" {}
                div style="margin-top:10px;" {
                    button id="btn-logout" { "Logout" }
                }
            }))

            (view_section("floor-view", true, html! {
                button id="btn-back-block" { "Back to Blocks" }
                h2 id="floor-title" {}
                div id="rooms" class="grid" {}
            }))

            (view_section("room-view", true, html! {
                button id="btn-back-floor" { "Back to Floor" }
                h2 id="room-title" {}
                div id="room-details" {}

                h3 { "Report an issue" }
                input id="issue-title" placeholder="Short title";
                textarea id="issue-desc" placeholder="Describe problem" {}
                select id="issue-sev" {
                    option value="yellow" { "Yellow (can be spared)" }
                    option value="red" { "Red (urgent)" }
                }
                button id="btn-report" { "Report Issue" }

                h3 { "Issues for this room" }
                div id="room-issues" {}
            }))

            (view_section("electrician-view", true, html! {
                h2 { "Electrician: Open Issues (Resolve)" }
                div id="open-issues" {}
            }))

            (view_section("student-view", true, html! {
                h2 { "Student: My Room" }
                div id="my-room" {}
                h3 { "My Issues" }
                div id="my-issues" {}
            }))
        },
    )
}
