/// A produced output file: a filename plus serialized workbook bytes
///
/// Filenames are unique within one operation's result set and always carry
/// the `.xlsx` extension. The bytes are final once the artifact is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl OutputArtifact {
    #[must_use]
    pub fn new(filename: String, bytes: Vec<u8>) -> Self {
        OutputArtifact { filename, bytes }
    }
}
