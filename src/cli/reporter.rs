use colored::Colorize;
use rustc_hash::FxHashMap;

use fmtcheck_checker::INSPECTION_NAME;
use fmtcheck_common::{Diagnostic, DiagnosticCategory, LineMap};

/// Renders diagnostics for humans.
///
/// Sources come from the snapshots themselves; a diagnostic whose file has
/// no registered source is printed as `file(start,length)`.
pub struct Reporter {
    color: bool,
    sources: FxHashMap<String, String>,
    line_maps: FxHashMap<String, LineMap>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            sources: FxHashMap::default(),
            line_maps: FxHashMap::default(),
        }
    }

    pub fn add_source(&mut self, file: impl Into<String>, source: impl Into<String>) {
        let file = file.into();
        self.line_maps.remove(&file);
        self.sources.insert(file, source.into());
    }

    pub fn render(&mut self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&mut self, diagnostic: &Diagnostic) -> String {
        let location = self
            .format_location(&diagnostic.file, diagnostic.start)
            .unwrap_or_else(|| {
                if diagnostic.file.is_empty() {
                    "<unknown>".to_string()
                } else {
                    format!(
                        "{}({},{})",
                        diagnostic.file, diagnostic.start, diagnostic.length
                    )
                }
            });
        let category = self.format_category(diagnostic.category);
        let code = self.format_code(diagnostic.code);

        let mut output = location;
        output.push_str(" - ");
        output.push_str(&category);
        output.push(' ');
        output.push_str(&code);
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);
        output.push_str(&self.format_source_label());

        if let Some(snippet) =
            self.format_snippet(&diagnostic.file, diagnostic.start, diagnostic.length)
        {
            output.push_str(&snippet);
        }

        output
    }

    /// Source line with the anchored span underlined.
    ///
    /// ```text
    ///     3       $logger->errorf("%d of %d failed", $count);
    ///                                     ~~
    /// ```
    fn format_snippet(&mut self, file: &str, start: u32, length: u32) -> Option<String> {
        if length == 0 {
            return None;
        }

        let (line_num, column) = self.position_for(file, start)?;
        let (end_line, end_column) = self.position_for(file, start + length)?;
        let source = self.sources.get(file)?;
        let line_text = source.lines().nth((line_num - 1) as usize)?;

        // spans running past the line are underlined to its end
        let end_column = if end_line == line_num {
            end_column
        } else {
            line_text.chars().count() as u32 + 1
        };

        let mut underline = String::new();
        for (i, ch) in line_text.chars().enumerate() {
            let col = i as u32 + 1;
            let mark = if col < column {
                ' '
            } else if col < end_column {
                '~'
            } else {
                break;
            };
            if ch == '\t' {
                underline.extend(std::iter::repeat_n(mark, 4));
            } else {
                underline.push(mark);
            }
        }
        if !underline.contains('~') {
            underline.push('~');
        }

        let underline_display = if self.color {
            underline.red().to_string()
        } else {
            underline
        };

        Some(format!(
            "\n  {:>3}   {}\n        {}",
            line_num,
            line_text.replace('\t', "    "),
            underline_display
        ))
    }

    fn format_location(&mut self, file: &str, offset: u32) -> Option<String> {
        if file.is_empty() {
            return None;
        }

        let (line, column) = self.position_for(file, offset)?;
        Some(format!("{}:{}:{}", file, line, column))
    }

    /// 1-based line and column of a byte offset.
    fn position_for(&mut self, file: &str, offset: u32) -> Option<(u32, u32)> {
        let source = self.sources.get(file)?;
        let line_map = self
            .line_maps
            .entry(file.to_string())
            .or_insert_with(|| LineMap::build(source));
        let position = line_map.offset_to_position(offset, source);
        Some((position.line + 1, position.character + 1))
    }

    fn format_source_label(&self) -> String {
        let label = format!(" [{INSPECTION_NAME}]");
        if self.color {
            label.dimmed().to_string()
        } else {
            label
        }
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.label();

        if self.color {
            label.yellow().bold().to_string()
        } else {
            label.to_string()
        }
    }

    fn format_code(&self, code: u32) -> String {
        let label = format!("FMT{}", code);
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }
}
