use anyhow::Result;
use lexis_core::{QueryResults, Retriever};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Ansi, Color, ColorSpec, NoColor, WriteColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Value,
    Key,
    Title,
}

impl Highlight {
    fn spec(self) -> ColorSpec {
        let fg = match self {
            Highlight::Value => Color::Green,
            Highlight::Key => Color::Magenta,
            Highlight::Title => Color::Red,
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(fg)).set_bg(Some(Color::Black)).set_bold(true);
        spec
    }
}

/// Write `text` with every occurrence of `term` highlighted.
///
/// On a colour writer each match is padded with a space on both sides; an
/// empty term is never highlighted.
pub fn write_highlighted<C: WriteColor>(out: &mut C, term: &str, text: &str, kind: Highlight) -> io::Result<()> {
    if term.is_empty() {
        return out.write_all(text.as_bytes());
    }
    let padded = out.supports_color();
    let mut rest = text;
    while let Some(pos) = rest.find(term) {
        out.write_all(rest[..pos].as_bytes())?;
        out.set_color(&kind.spec())?;
        if padded {
            write!(out, " {term} ")?;
        } else {
            out.write_all(term.as_bytes())?;
        }
        out.reset()?;
        rest = &rest[pos + term.len()..];
    }
    out.write_all(rest.as_bytes())
}

#[derive(Serialize)]
struct RawHit<'a> {
    term: &'a str,
    path: &'a str,
    frequency: u32,
}

/// One JSON line per appearance.
pub fn raw<W: Write>(retriever: &Retriever<'_>, results: &QueryResults<'_>, out: &mut W) -> Result<()> {
    for hits in results.iter() {
        for appearance in hits.appearances {
            let Some(resolved) = retriever.resolve(appearance) else { continue };
            let hit = RawHit { term: hits.term, path: &resolved.document.path, frequency: resolved.frequency };
            serde_json::to_writer(&mut *out, &hit)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Term banner, then for each document its frequency and the lines containing the term.
pub fn pretty<W: Write>(retriever: &Retriever<'_>, results: &QueryResults<'_>, color: bool, out: &mut W) -> Result<()> {
    if color {
        write_pretty(retriever, results, &mut Ansi::new(&mut *out))?;
    } else {
        write_pretty(retriever, results, &mut NoColor::new(&mut *out))?;
    }
    Ok(())
}

fn write_pretty<C: WriteColor>(retriever: &Retriever<'_>, results: &QueryResults<'_>, out: &mut C) -> io::Result<()> {
    for hits in results.iter() {
        write!(out, "---------------------- ")?;
        write_highlighted(out, hits.term, hits.term, Highlight::Title)?;
        writeln!(out, " ----------------------")?;

        for appearance in hits.appearances {
            let Some(resolved) = retriever.resolve(appearance) else { continue };
            let doc = resolved.document;
            let header = format!("Appears {} times in {}", resolved.frequency, doc.path);
            write!(out, "\n**")?;
            write_highlighted(out, &header, &header, Highlight::Title)?;
            writeln!(out)?;

            // `lines` also drops the '\r' of CRLF endings
            for line in doc.text.lines() {
                if line.is_empty() || !line.contains(hits.term) { continue; }
                write_highlighted(out, &doc.path, &doc.path, Highlight::Key)?;
                write!(out, ":")?;
                write_highlighted(out, hits.term, line, Highlight::Value)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
