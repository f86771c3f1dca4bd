//! Build stamp printed on the songbook's title page.

/// `\date{…}` stamping the compilation day and the repository revision, as
/// given by `git describe`.
pub fn date_command(revision: &str) -> String {
    format!(
        r"\date{{compilé le \today{{}} -- commit \texttt{{{}}}}}",
        revision.trim()
    )
}
