//! Static page sections: hero, about, contact details, footer

use super::document::{DocBuilder, DocTarget};
use super::text::display_width;
use crate::model::content::{AssetBase, SiteContent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn card_title() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn button(primary: bool) -> Style {
    if primary {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }
}

fn link() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn hero(doc: &mut DocBuilder, content: &SiteContent, assets: &AssetBase) {
    let hero = &content.hero;

    doc.anchor("home");
    doc.blank();
    doc.text(format!(" {} ", hero.pill), Style::default().fg(Color::Black).bg(Color::Gray));
    doc.blank();
    doc.text(
        hero.title.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    doc.text(hero.subtitle.clone(), Style::default().fg(Color::Magenta));
    doc.blank();
    doc.paragraph(&hero.lead, Style::default());
    doc.blank();

    // Call-to-action buttons: [ Портфолио ] [ Связаться ]
    let primary = " Портфолио ";
    let secondary = " Связаться ";
    let primary_width = display_width(primary) as u16;
    let secondary_width = display_width(secondary) as u16;
    let line = doc.current_line();
    doc.push(vec![
        Span::styled(primary, button(true)),
        Span::raw("  "),
        Span::styled(secondary, button(false)),
        Span::styled("   p / c", muted()),
    ]);
    doc.hit(line..line + 1, 0..primary_width, DocTarget::Nav("#portfolio"));
    doc.hit(
        line..line + 1,
        primary_width + 2..primary_width + 2 + secondary_width,
        DocTarget::Nav("#contacts"),
    );
    doc.blank();

    for fact in &hero.facts {
        doc.push(vec![
            Span::styled(format!("{}: ", fact.key), muted()),
            Span::styled(fact.value.clone(), Style::default().fg(Color::White)),
        ]);
    }
    doc.blank();

    // Portrait card; the terminal shows where the image lives
    doc.push(vec![
        Span::styled("▣ ", Style::default().fg(Color::Magenta)),
        Span::styled(hero.portrait_alt.clone(), card_title()),
    ]);
    doc.text(format!("  {}", assets.resolve(&hero.portrait_src)), muted());
    doc.blank();
}

pub fn about(doc: &mut DocBuilder, content: &SiteContent) {
    let about = &content.about;

    doc.anchor("about");
    doc.heading("Обо мне");
    doc.blank();
    doc.text(about.practice_title.clone(), card_title());
    doc.paragraph(&about.practice, muted());
    doc.blank();
    doc.text(about.process_title.clone(), card_title());
    for (i, step) in about.process_steps.iter().enumerate() {
        doc.push(vec![
            Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::Magenta)),
            Span::raw(step.clone()),
        ]);
    }
    doc.blank();
}

/// Contact details above the feedback form
pub fn contact_details(doc: &mut DocBuilder, content: &SiteContent) {
    let contacts = &content.contacts;

    doc.anchor("contacts");
    doc.heading("Контакты");
    doc.blank();
    doc.text("Связаться со мной", card_title());

    let line = doc.current_line();
    doc.push(vec![
        Span::styled("Телефон: ", muted()),
        Span::styled(contacts.phone.clone(), link()),
        Span::styled("   P", muted()),
    ]);
    doc.hit_line(line, DocTarget::Link(contacts.tel_uri()));

    let line = doc.current_line();
    doc.push(vec![
        Span::styled("Email: ", muted()),
        Span::styled(contacts.email.clone(), link()),
        Span::styled("   E", muted()),
    ]);
    doc.hit_line(line, DocTarget::Link(contacts.mailto_uri()));

    for social in &contacts.socials {
        let line = doc.current_line();
        let label = format!(" ✈ {} ", social.label);
        let width = display_width(&label) as u16;
        doc.push(vec![
            Span::styled(label, button(false)),
            Span::styled("   T", muted()),
        ]);
        doc.hit(line..line + 1, 0..width, DocTarget::Link(social.url.clone()));
    }
    doc.blank();
}

pub fn footer(doc: &mut DocBuilder, content: &SiteContent, year: i32) {
    let contacts = &content.contacts;
    let tel = contacts.tel_uri();
    let mailto = contacts.mailto_uri();

    doc.text("─".repeat(doc.width), muted());
    doc.text(format!("© {} {}", year, content.brand), muted());

    let line = doc.current_line();
    let tel_width = display_width(&tel) as u16;
    doc.push(vec![
        Span::styled(tel.clone(), link()),
        Span::styled(" • ", muted()),
        Span::styled(mailto.clone(), link()),
    ]);
    doc.hit(line..line + 1, 0..tel_width, DocTarget::Link(tel));
    doc.hit(
        line..line + 1,
        tel_width + 3..tel_width + 3 + display_width(&mailto) as u16,
        DocTarget::Link(mailto),
    );
    doc.blank();
}
