//! Byte count labels for the grid ruler

/// Human-readable byte count with truncating unit steps: "N B", "N KB", "N MB", "N GB"
pub fn bytes_to_str(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let kb = bytes / 1024;
    if kb < 1024 {
        return format!("{} KB", kb);
    }
    let mb = kb / 1024;
    if mb < 1024 {
        return format!("{} MB", mb);
    }
    format!("{} GB", mb / 1024)
}
