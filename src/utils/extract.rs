use crate::error::InstallError;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Unpacks `archive_path` into `target_dir`. On failure the partially
/// extracted target directory is removed so a broken install can never be
/// mistaken for a cached runtime.
pub fn extract_archive(archive_path: &Path, target_dir: &Path) -> Result<(), InstallError> {
    let archive_str = archive_path.to_string_lossy();

    let result = if archive_str.ends_with(".zip") {
        extract_zip(archive_path, target_dir)
    } else if archive_str.ends_with(".tar.gz") {
        extract_tar_gz(archive_path, target_dir)
    } else {
        Err(anyhow::anyhow!("unsupported archive format"))
    };

    if let Err(err) = result {
        let _ = fs::remove_dir_all(target_dir);
        return Err(InstallError::ExtractionFailed {
            archive: archive_path.to_path_buf(),
            detail: err.to_string(),
        });
    }

    Ok(())
}

fn extract_zip(archive_path: &Path, target_dir: &Path) -> Result<()> {
    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        // Entries with traversal components are dropped rather than written
        // outside the target directory.
        let relative = match entry.enclosed_name() {
            Some(name) => name.to_path_buf(),
            None => continue,
        };
        let outpath = target_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = fs::File::create(&outpath)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
            }
        }
    }

    Ok(())
}

fn extract_tar_gz(archive_path: &Path, target_dir: &Path) -> Result<()> {
    let file = fs::File::open(archive_path)?;
    let decompressed = flate2::read::GzDecoder::new(file);
    let mut archive = tar::Archive::new(decompressed);

    archive.unpack(target_dir)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::extract_archive;
    use crate::error::InstallError;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "electron-global-extract-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn extracts_a_zip_archive() {
        let dir = scratch_dir("zip");
        let archive = dir.join("electron.zip");
        let target = dir.join("6");

        let file = fs::File::create(&archive).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("electron", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"binary bits").unwrap();
        writer
            .start_file("resources/default_app.asar", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"asar bits").unwrap();
        writer.finish().unwrap();

        extract_archive(&archive, &target).unwrap();

        assert_eq!(fs::read(target.join("electron")).unwrap(), b"binary bits");
        assert_eq!(
            fs::read(target.join("resources/default_app.asar")).unwrap(),
            b"asar bits"
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn extracts_a_tar_gz_archive() {
        let dir = scratch_dir("targz");
        let archive = dir.join("electron.tar.gz");
        let target = dir.join("6");

        let file = fs::File::create(&archive).unwrap();
        let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        let mut builder = tar::Builder::new(encoder);

        let data = b"binary bits";
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder.append_data(&mut header, "electron", data.as_slice()).unwrap();
        builder.into_inner().unwrap().finish().unwrap();

        extract_archive(&archive, &target).unwrap();

        assert_eq!(fs::read(target.join("electron")).unwrap(), b"binary bits");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn failure_removes_the_partial_target_dir_and_names_the_archive() {
        let dir = scratch_dir("corrupt");
        let archive = dir.join("electron.zip");
        let target = dir.join("6");

        fs::write(&archive, b"this is not a zip file").unwrap();
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("partial"), b"leftover").unwrap();

        match extract_archive(&archive, &target) {
            Err(InstallError::ExtractionFailed { archive: named, .. }) => {
                assert_eq!(named, archive);
            }
            other => panic!("expected ExtractionFailed, got {:?}", other),
        }
        assert!(!target.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unknown_formats_are_rejected() {
        let dir = scratch_dir("format");
        let archive = dir.join("electron.rar");
        let target = dir.join("6");
        fs::write(&archive, b"whatever").unwrap();

        assert!(extract_archive(&archive, &target).is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
