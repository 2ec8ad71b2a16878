//! Markdown to HTML for component help strings
//!
//! Task lists are enabled and soft line breaks become `<br>`. Bare URLs,
//! `www.` hosts and email addresses are turned into links, except inside code
//! blocks and existing links. Links written as raw `<a>` HTML count as
//! existing links.

use crate::errors::GenerateError;
use crate::links::{autolink_pattern, autolink_target};
use pulldown_cmark::{
    html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream,
};
use regex::Regex;

pub fn render_description(markdown: &str) -> Result<String, GenerateError> {
    let pattern = autolink_pattern()?;
    let mut events = Vec::new();
    // Depth of code blocks, links and images we are currently inside
    let mut verbatim_depth = 0usize;

    for event in TextMergeStream::new(Parser::new_ext(markdown, Options::ENABLE_TASKLISTS)) {
        match event {
            Event::Start(tag @ (Tag::CodeBlock(_) | Tag::Link { .. } | Tag::Image { .. })) => {
                verbatim_depth += 1;
                events.push(Event::Start(tag));
            }
            Event::End(end @ (TagEnd::CodeBlock | TagEnd::Link | TagEnd::Image)) => {
                verbatim_depth = verbatim_depth.saturating_sub(1);
                events.push(Event::End(end));
            }
            Event::InlineHtml(ref raw) | Event::Html(ref raw) => {
                let (opens, closes) = anchor_tags(raw);
                verbatim_depth = (verbatim_depth + opens).saturating_sub(closes);
                events.push(event);
            }
            Event::SoftBreak => events.push(Event::InlineHtml(CowStr::Borrowed("<br>"))),
            Event::Text(text) if verbatim_depth == 0 => autolink(&text, pattern, &mut events),
            other => events.push(other),
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    Ok(out)
}

/// Count `<a ...>` openings and `</a>` closings in a chunk of raw HTML
fn anchor_tags(raw: &str) -> (usize, usize) {
    let lower = raw.to_ascii_lowercase();
    let opens = lower
        .match_indices("<a")
        .filter(|(at, _)| {
            lower[at + 2..]
                .chars()
                .next()
                .is_some_and(|c| c == '>' || c.is_ascii_whitespace())
        })
        .count();
    (opens, lower.matches("</a>").count())
}

fn autolink<'a>(text: &str, pattern: &Regex, events: &mut Vec<Event<'a>>) {
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            events.push(Event::Text(CowStr::from(text[last..found.start()].to_string())));
        }
        events.push(Event::Start(Tag::Link {
            link_type: LinkType::Inline,
            dest_url: CowStr::from(autolink_target(pattern, found.as_str())),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        events.push(Event::Text(CowStr::from(found.as_str().to_string())));
        events.push(Event::End(TagEnd::Link));
        last = found.end();
    }
    if last < text.len() {
        events.push(Event::Text(CowStr::from(text[last..].to_string())));
    }
}
