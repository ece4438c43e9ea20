use std::path::PathBuf;

/// Exit status for a command line usage error (BSD `EX_USAGE`).
pub const EXIT_USAGE: u8 = 64;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("usage: ast-gen <output directory>")]
    Usage,

    #[error("malformed rule `{line}` in family `{family}`: expected `Variant : Type field, ...`")]
    MalformedVariant { family: String, line: String },

    #[error("malformed field `{field}` in `{family}::{variant}`: expected exactly `<Type> <name>`")]
    MalformedField {
        family: String,
        variant: String,
        field: String,
    },

    #[error("failed to {op} `{}`", .path.display())]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which step of the remove-then-create cycle failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    Remove,
    Create,
    Write,
}

impl std::fmt::Display for IoOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            IoOp::Remove => "remove stale artifact",
            IoOp::Create => "create artifact",
            IoOp::Write => "write artifact",
        };
        f.write_str(verb)
    }
}

impl GenError {
    pub fn io(op: IoOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io { op, path: path.into(), source }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            GenError::Usage => EXIT_USAGE,
            _ => 1,
        }
    }
}
