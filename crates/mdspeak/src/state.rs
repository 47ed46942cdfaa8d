const FENCE: &[u8] = b"```";
const HEADING_MARKER: u8 = b'#';
const QUOTE_MARKER: u8 = b'>';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Region {
    #[default]
    Prose,
    CodeBlock,
}

/// What the scanner decided about a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opens or closes a fenced code block.
    Fence,
    /// Inside a fenced code block.
    Code,
    Heading,
    Quote,
    /// Eligible for tokenizing.
    Prose,
}

impl LineKind {
    pub fn is_prose(self) -> bool {
        self == Self::Prose
    }
}

#[derive(Debug, Default)]
pub struct ScanState {
    region: Region,
    fences: usize,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn fences_seen(&self) -> usize {
        self.fences
    }

    /// Classifies `line` and advances the state machine.
    ///
    /// Only the first three bytes are inspected for a fence, so anything after
    /// the backticks (an info string, more backticks) is ignored. The fence
    /// check runs before the heading and quote checks.
    pub fn classify(&mut self, line: &[u8]) -> LineKind {
        if line.starts_with(FENCE) {
            self.fences += 1;
            self.region = match self.region {
                Region::Prose => Region::CodeBlock,
                Region::CodeBlock => Region::Prose,
            };
            return LineKind::Fence;
        }

        if self.region == Region::CodeBlock {
            return LineKind::Code;
        }

        match line.first() {
            Some(&HEADING_MARKER) => LineKind::Heading,
            Some(&QUOTE_MARKER) => LineKind::Quote,
            _ => LineKind::Prose,
        }
    }
}
