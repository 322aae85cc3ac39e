use std::io;
use std::path::Path;
use tokenizers::{Tokenizer, TruncationParams};

/// Loads `tokenizer.json`, truncating inputs to `max_len` tokens.
///
/// Position embeddings of sentence encoders are fixed-size; long account
/// descriptions are cut rather than rejected.
pub fn load_tokenizer_with_truncation(
    tokenizer_path: &Path,
    max_len: usize,
) -> io::Result<Tokenizer> {
    if !tokenizer_path.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("tokenizer not found at {}", tokenizer_path.display()),
        ));
    }

    let mut tokenizer = Tokenizer::from_file(tokenizer_path).map_err(io::Error::other)?;

    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: max_len,
            ..Default::default()
        }))
        .map_err(|e| io::Error::other(format!("invalid truncation for {max_len} tokens: {e}")))?;

    // Texts are encoded one at a time.
    tokenizer.with_padding(None);

    Ok(tokenizer)
}
