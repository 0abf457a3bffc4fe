//! Optional call tracing for the parser.
//!
//! When enabled, each traced parse function logs `BEGIN <name>` on entry and
//! `END <name>` on exit through the `log` facade (target `parser`, level
//! `trace`), indented with one tab per nesting level. The tracer belongs to a
//! single parser, so concurrent parses never share a depth counter.

const TRACE_INDENT: &str = "\t";

#[derive(Debug, Clone, Default)]
pub struct Tracer {
    enabled: bool,
    depth: usize,
}

impl Tracer {
    pub fn new(enabled: bool) -> Self {
        Tracer { enabled, depth: 0 }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn begin(&mut self, label: &str) {
        self.depth += 1;
        self.print("BEGIN", label);
    }

    pub fn end(&mut self, label: &str) {
        self.print("END", label);
        self.depth = self.depth.saturating_sub(1);
    }

    fn print(&self, event: &str, label: &str) {
        if self.enabled {
            let indent = TRACE_INDENT.repeat(self.depth.saturating_sub(1));
            log::trace!(target: "parser", "{}{} {}", indent, event, label);
        }
    }
}
