use thiserror::Error;

/** errors surfaced by the instance readers and writers.

Each variant renders as a one-line diagnostic starting with the file
name; the offending line number is embedded in the message when it is
known. The solvers themselves never fail: they either return a
coloring or hit a debug assertion on a broken invariant.
*/
#[derive(Debug, Error)]
pub enum InstanceError {
    /// malformed content (unknown tag, bad field, wrong edge count...)
    #[error("{file}: {message}")]
    Format {
        /// file in which the error was detected
        file: String,
        /// what went wrong, prefixed with `line N:` when known
        message: String,
    },
    /// the underlying read or write failed
    #[error("{file}: {source}")]
    Io {
        /// file on which the operation failed
        file: String,
        /// originating I/O error
        #[source]
        source: std::io::Error,
    },
    /// the graph does not fit the supported dimensions
    #[error("{file}: {message}")]
    Oversize {
        /// file in which the graph was found
        file: String,
        /// which bound is exceeded
        message: String,
    },
}

impl InstanceError {
    /// builds a Format error carrying a line number
    pub fn at_line(file: &str, line: usize, message: String) -> Self {
        Self::Format { file: file.to_string(), message: format!("line {}: {}", line, message) }
    }

    /// builds a Format error with no meaningful line number
    pub fn format(file: &str, message: String) -> Self {
        Self::Format { file: file.to_string(), message }
    }

    /// wraps an I/O error
    pub fn io(file: &str, source: std::io::Error) -> Self {
        Self::Io { file: file.to_string(), source }
    }

    /// builds an Oversize error
    pub fn oversize(file: &str, message: String) -> Self {
        Self::Oversize { file: file.to_string(), message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let e = InstanceError::at_line("g.col", 12, "unknown line tag 'x'".to_string());
        assert_eq!(format!("{}", e), "g.col: line 12: unknown line tag 'x'");
    }

    #[test]
    fn test_display_oversize() {
        let e = InstanceError::oversize("g.b", "65536 vertices (maximum 65535)".to_string());
        assert_eq!(format!("{}", e), "g.b: 65536 vertices (maximum 65535)");
    }
}
