//! Client-side archive checks run before an upload request.
//!
//! Pure functions: no I/O, no browser types. The backend repeats both
//! checks, these only save a pointless 200 MB round-trip.

use crate::error::FileValidationError;

/// Upload size limit in bytes (200 MiB).
pub const MAX_UPLOAD_SIZE: u64 = 200 * 1024 * 1024;

/// Accepted archive extensions, lower-case with the leading dot.
pub const ALLOWED_EXTENSIONS: [&str; 2] = [".zip", ".rar"];

/// Value for the file picker's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".zip,.rar";

/// Lower-cased extension from the last `.` on, or `""` when there is none.
pub fn file_extension(name: &str) -> String {
    name.rfind('.')
        .map(|idx| name[idx..].to_lowercase())
        .unwrap_or_default()
}

/// Checks a candidate archive by name and size.
///
/// Size is checked first, so an oversized file of the wrong type reports
/// [`FileValidationError::TooLarge`].
pub fn validate_file(name: &str, size: u64) -> Result<(), FileValidationError> {
    if size > MAX_UPLOAD_SIZE {
        return Err(FileValidationError::TooLarge {
            size,
            max: MAX_UPLOAD_SIZE,
        });
    }

    let extension = file_extension(name);
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(FileValidationError::UnsupportedType { extension });
    }

    Ok(())
}
