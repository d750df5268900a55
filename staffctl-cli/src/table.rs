//! Plain-text table rendering.
//!
//! Left-aligned columns padded to the widest cell, a dash rule under the
//! header, two spaces between columns. NULL values should be passed as
//! empty strings.

pub struct Table<const N: usize> {
    headers: [&'static str; N],
    rows: Vec<[String; N]>,
}

impl<const N: usize> Table<N> {
    pub fn new(headers: [&'static str; N]) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: [String; N]) {
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let mut widths = [0usize; N];
        for (i, header) in self.headers.iter().enumerate() {
            widths[i] = header.chars().count();
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for (i, header) in self.headers.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            // The last column is never padded, keeping line ends clean.
            if i == N - 1 {
                out.push_str(header);
            } else {
                pad(&mut out, header, widths[i]);
            }
        }
        out.push('\n');
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            for _ in 0..*width {
                out.push('-');
            }
        }
        out.push('\n');
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    out.push_str("  ");
                }
                if i == N - 1 {
                    out.push_str(cell);
                } else {
                    pad(&mut out, cell, widths[i]);
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn print(&self) {
        if self.rows.is_empty() {
            println!("(no rows)");
            return;
        }
        print!("{}", self.render());
    }
}

fn pad(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    for _ in text.chars().count()..width {
        out.push(' ');
    }
}
