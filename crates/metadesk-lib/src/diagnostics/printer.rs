//! Builder-pattern printer for rendering diagnostics as annotated snippets.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{Annotation, AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use super::{Diagnostic, Diagnostics};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            let report = [Level::ERROR
                .primary_title(&diag.message)
                .element(self.snippet(diag, source))];
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    /// The title already carries the message, so the primary caret is bare.
    /// Related spans such as the opener of an unclosed list keep their labels.
    fn snippet<'a>(
        &'a self,
        diag: &'a Diagnostic,
        source: &'a str,
    ) -> Snippet<'a, Annotation<'a>> {
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(caret_span(source, diag.range)));

        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }

        diag.related.iter().fold(snippet, |snippet, related| {
            snippet.annotation(
                AnnotationKind::Context
                    .span(caret_span(source, related.range))
                    .label(&related.message),
            )
        })
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }
}

/// Byte span to underline. An empty range widens to the character at its
/// offset so the caret never splits a multi-byte character.
fn caret_span(source: &str, range: TextRange) -> Range<usize> {
    let start = floor_char_boundary(source, range.start().into());
    let end = floor_char_boundary(source, range.end().into());
    if start < end {
        return start..end;
    }

    let width = source[start..].chars().next().map_or(0, char::len_utf8);
    start..start + width
}

fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
