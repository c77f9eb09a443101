use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use eyre::WrapErr;

// buffer size when copying resource files
const BUF_SIZE: usize = 50_000;

// resources bundled into the binary, keyed by their leading-'/' path
static RESOURCES: &[(&str, &[u8])] = &[(
    "/blocks.xml",
    include_bytes!("../../resources/blocks.xml"),
)];

// resource paths all start with a leading '/'; add it if it's not there
pub fn resource_bytes(resource_path: &str) -> Option<&'static [u8]> {
    let normalized = if resource_path.starts_with('/') {
        resource_path.to_owned()
    } else {
        format!("/{resource_path}")
    };

    RESOURCES
        .iter()
        .find(|(path, _)| *path == normalized)
        .map(|(_, bytes)| *bytes)
}

// copies a bundled resource to an external file, creating missing parent
// directories, overwriting any existing destination
pub fn copy_resource_to_file(resource_path: &str, out_file: &Path) -> eyre::Result<()> {
    let Some(bytes) = resource_bytes(resource_path) else {
        eyre::bail!("unable to copy resource '{resource_path}': resource not found");
    };

    if let Some(parent) = out_file.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).wrap_err_with(|| {
                format!(
                    "unable to create directory at '{}' to copy resource '{resource_path}'",
                    parent.display()
                )
            })?;
        }
    }

    let mut out = File::create(out_file).wrap_err_with(|| {
        format!(
            "unable to create file at '{}' to copy resource '{resource_path}'",
            out_file.display()
        )
    })?;

    let mut reader: &[u8] = bytes;
    let mut buffer = [0u8; BUF_SIZE];
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        out.write_all(&buffer[..read])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn unittest_resource_path_is_normalized() {
        assert!(resource_bytes("blocks.xml").is_some());
        assert!(resource_bytes("/blocks.xml").is_some());
        assert!(resource_bytes("missing.xml").is_none());
    }

    #[test]
    fn unittest_copy_resource_creates_parent_directories() -> eyre::Result<()> {
        let out_file = env::temp_dir()
            .join("block-set-unittest-copy")
            .join("nested")
            .join("blocks.xml");
        let _ = fs::remove_dir_all(out_file.parent().unwrap().parent().unwrap());

        copy_resource_to_file("blocks.xml", &out_file)?;

        let copied = fs::read(&out_file)?;
        assert_eq!(copied, resource_bytes("blocks.xml").unwrap());

        Ok(())
    }

    #[test]
    fn unittest_missing_resource_reports_not_found() {
        let out_file = env::temp_dir().join("block-set-unittest-missing.xml");
        let report = copy_resource_to_file("missing.xml", &out_file).unwrap_err();

        assert!(report.to_string().contains("resource not found"));
        assert!(!out_file.exists());
    }
}
