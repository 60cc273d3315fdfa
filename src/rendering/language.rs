// src/rendering/language.rs

/// The fence language tag for a file extension (with its leading dot).
///
/// # Examples
///
/// ```
/// use promptctx::rendering::language_for_extension;
///
/// assert_eq!(language_for_extension(".py"), "py");
/// assert_eq!(language_for_extension(".md"), "markdown");
/// assert_eq!(language_for_extension(".yaml"), "plaintext");
/// ```
pub fn language_for_extension(extension: &str) -> &'static str {
    match extension {
        ".py" => "py",
        ".md" => "markdown",
        ".html" => "html",
        ".ipynb" => "ipynb",
        _ => "plaintext",
    }
}
