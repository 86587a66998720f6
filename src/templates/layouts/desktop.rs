// src/templates/layouts/desktop.rs

use crate::domain::language::Language;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, lang: Language, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang.code()) dir=(lang.dir()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="topbar" {
                    h3 { "Emlak Classifieds" }
                    nav {
                        ul {
                            li { a href=(format!("/?lang={}", lang.code())) { "Listings" } }
                            li { a href=(format!("/admin?lang={}", lang.code())) { "Admin" } }
                        }
                    }
                    nav class="lang-switch" {
                        ul {
                            li { a href="?lang=ar" { "العربية" } }
                            li { a href="?lang=en" { "English" } }
                            li { a href="?lang=tr" { "Türkçe" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
