//! Server-rendered HTML pages for browsers.
//!
//! Every piece of text that comes from the store is escaped, card text
//! included.

use std::fmt::Write;

use crate::domain::{Card, CardMeta, Deck, GameRounds, Play, Round, RoundSummary, SessionMeta, UserMeta};
use crate::render::format_timestamp;

/// A view that can be rendered as a complete HTML document.
pub trait HtmlView {
    fn title(&self) -> String;

    fn write_body(&self, out: &mut String);

    fn render_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape(&self.title()));
        out.push_str("</head>\n<body>\n");
        self.write_body(&mut out);
        out.push_str("</body>\n</html>\n");
        out
    }
}

/// Escapes text for use in element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_card(out: &mut String, card: &Card) {
    match card.meta {
        CardMeta::White => {
            let _ = write!(out, "<div class=\"card white\">{}", escape(&card.text));
        }
        CardMeta::Black { draw, pick } => {
            let _ = write!(out, "<div class=\"card black\">{}", escape(&card.text));
            if draw > 0 {
                let _ = write!(out, "<span class=\"draw\">Draw {draw}</span>");
            }
            if pick > 1 {
                let _ = write!(out, "<span class=\"pick\">Pick {pick}</span>");
            }
        }
    }
    let _ = writeln!(out, "<span class=\"watermark\">{}</span></div>", escape(&card.watermark));
}

fn write_play(out: &mut String, class: &str, play: &Play) {
    let _ = writeln!(out, "<div class=\"play {class}\">");
    for card in play {
        write_card(out, card);
    }
    out.push_str("</div>\n");
}

fn write_summaries(out: &mut String, heading: &str, rounds: &[RoundSummary]) {
    let _ = writeln!(out, "<h2>{}</h2>", escape(heading));
    if rounds.is_empty() {
        out.push_str("<p>No rounds.</p>\n");
        return;
    }
    out.push_str("<ul class=\"rounds\">\n");
    for round in rounds {
        let _ = writeln!(
            out,
            "<li><a href=\"/round/{id}\">{text}</a> <time>{ts}</time></li>",
            id = escape(&round.round_id),
            text = escape(&round.black_card.text),
            ts = format_timestamp(round.timestamp),
        );
    }
    out.push_str("</ul>\n");
}

impl HtmlView for Deck {
    fn title(&self) -> String {
        format!("Deck {}: {}", self.id, self.name)
    }

    fn write_body(&self, out: &mut String) {
        let _ = writeln!(out, "<h1>{}</h1>", escape(&self.name));
        let _ = writeln!(
            out,
            "<p>{} black cards, {} white cards. <a href=\"/deck/{}/download\">Download CSV</a></p>",
            self.black_count,
            self.white_count,
            escape(&self.id),
        );
        out.push_str("<h2>Black cards</h2>\n");
        for card in &self.black_cards {
            write_card(out, card);
        }
        out.push_str("<h2>White cards</h2>\n");
        for card in &self.white_cards {
            write_card(out, card);
        }
    }
}

impl HtmlView for Round {
    fn title(&self) -> String {
        format!("Round played {}", format_timestamp(self.timestamp))
    }

    fn write_body(&self, out: &mut String) {
        write_card(out, &self.black_card);
        let _ = writeln!(out, "<p>Played <time>{}</time>", format_timestamp(self.timestamp));
        if let Some(game_id) = &self.game_id {
            let id = escape(game_id);
            let _ = write!(out, " in game <a href=\"/game/{id}\">{id}</a>");
        }
        out.push_str("</p>\n");

        match &self.winning_play {
            Some(play) => {
                out.push_str("<h2>Winner</h2>\n");
                write_play(out, "winner", play);
            }
            None => out.push_str("<p>No winning play was recorded.</p>\n"),
        }

        out.push_str("<h2>Other plays</h2>\n");
        for play in &self.other_plays {
            write_play(out, "other", play);
        }
    }
}

impl HtmlView for GameRounds {
    fn title(&self) -> String {
        format!("Game {}", self.game_id)
    }

    fn write_body(&self, out: &mut String) {
        let _ = writeln!(out, "<h1>Game {}</h1>", escape(&self.game_id));
        write_summaries(out, "Rounds", &self.rounds);
    }
}

impl HtmlView for SessionMeta {
    fn title(&self) -> String {
        format!("Session {}", self.session_id)
    }

    fn write_body(&self, out: &mut String) {
        let _ = writeln!(out, "<h1>Session {}</h1>", escape(&self.session_id));
        let user = escape(&self.persistent_id);
        let _ = writeln!(
            out,
            "<p>User <a href=\"/user/{user}\">{user}</a> logged in <time>{}</time></p>",
            format_timestamp(self.log_in_timestamp),
        );
        write_summaries(out, "Played rounds", &self.played_rounds);
        write_summaries(out, "Judged rounds", &self.judged_rounds);
    }
}

impl HtmlView for UserMeta {
    fn title(&self) -> String {
        format!("User {}", self.persistent_id)
    }

    fn write_body(&self, out: &mut String) {
        let _ = writeln!(out, "<h1>User {}</h1>", escape(&self.persistent_id));
        if self.sessions.is_empty() {
            out.push_str("<p>No sessions.</p>\n");
            return;
        }
        out.push_str("<ul class=\"sessions\">\n");
        for session in &self.sessions {
            let _ = writeln!(
                out,
                "<li><a href=\"/session/{id}\">{id}</a> on server {server} <time>{ts}</time></li>",
                id = escape(&session.session_id),
                server = escape(session.server_id()),
                ts = format_timestamp(session.log_in_timestamp),
            );
        }
        out.push_str("</ul>\n");
    }
}
