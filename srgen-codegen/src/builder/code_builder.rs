//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use srgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::cpp()
///     .line("namespace caf")
///     .line("{")
///     .indent()
///     .line("class SRProxy;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "namespace caf\n{\n  class SRProxy;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (C++ house style).
    pub fn cpp() -> Self {
        Self::new(Indent::CPP)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use srgen_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::cpp()
    ///     .block_with_close("class SRTrackProxy", "};", |b| {
    ///         b.line("public:")
    ///     })
    ///     .build();
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::cpp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::cpp().line("#pragma once").build();
        assert_eq!(code, "#pragma once\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::cpp()
            .line("{")
            .indent()
            .line("int x;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "{\n  int x;\n}\n");
    }

    #[test]
    fn test_block_with_close() {
        let code = CodeBuilder::cpp()
            .block_with_close("class Foo", "};", |b| b.line("public:"))
            .build();

        assert_eq!(code, "class Foo\n  public:\n};\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::cpp()
            .line("#include <vector>")
            .blank()
            .line("namespace caf{")
            .build();

        assert_eq!(code, "#include <vector>\n\nnamespace caf{\n");
    }

    #[test]
    fn test_conditional() {
        let with_base = CodeBuilder::cpp()
            .when(true, |b| b.line("class A: public B"))
            .build();

        let without_base = CodeBuilder::cpp()
            .when(false, |b| b.line("class A: public B"))
            .line("class A")
            .build();

        assert_eq!(with_base, "class A: public B\n");
        assert_eq!(without_base, "class A\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::cpp()
            .indent()
            .each(["x", "y", "z"], |b, name| {
                b.line(&format!("Proxy<float> {};", name))
            })
            .build();

        assert_eq!(
            code,
            "  Proxy<float> x;\n  Proxy<float> y;\n  Proxy<float> z;\n"
        );
    }

    #[test]
    fn test_raw() {
        let code = CodeBuilder::cpp().raw("a").raw("b").build();
        assert_eq!(code, "ab");
    }
}
