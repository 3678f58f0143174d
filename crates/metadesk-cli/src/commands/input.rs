use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input is required: use a FILE argument, \"-\" for stdin, or -s/--source")]
    Missing,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{}': {}", .path.display(), .source)]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Source text and the name to show for it in diagnostics.
pub struct Input {
    pub name: Option<String>,
    pub text: String,
}

pub fn load_input(path: Option<&Path>, text: Option<&str>) -> Result<Input, InputError> {
    if let Some(text) = text {
        return Ok(Input {
            name: None,
            text: text.to_string(),
        });
    }

    let Some(path) = path else {
        return Err(InputError::Missing);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(InputError::Stdin)?;
        return Ok(Input {
            name: Some("<stdin>".to_string()),
            text: buf,
        });
    }

    let text = fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Input {
        name: Some(path.to_string_lossy().into_owned()),
        text,
    })
}

/// Like [`load_input`], exiting with status 1 on failure.
pub fn load_input_or_exit(path: Option<&Path>, text: Option<&str>) -> Input {
    match load_input(path, text) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
