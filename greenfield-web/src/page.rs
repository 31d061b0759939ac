//! Home page composition.

use chrono::Utc;
use greenfield::format_date;
use greenfield_ui::{Button, Card, Variant};

/// Render the home page to a full HTML document.
pub fn home() -> String {
    let today = format_date(&Utc::now());

    let button = Button::new("Click Me").variant(Variant::Primary).render();
    let card = Card::new(format!(
        "<p>This is a Rust application using shared components and utilities.</p>{button}"
    ))
    .title("Getting Started")
    .render();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>Greenfield</title></head>\n\
         <body>\n\
         <main style=\"padding: 2rem\">\n\
         <h1>Welcome to the Monorepo</h1>\n\
         <p>Today is {today}</p>\n\
         {card}\n\
         </main>\n\
         </body>\n\
         </html>\n"
    )
}
