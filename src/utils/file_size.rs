pub struct FileSizeUtils;

impl FileSizeUtils {
    pub fn format_size(size: u64) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", size as u64, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_typical_photo_sizes() {
        assert_eq!(FileSizeUtils::format_size(512), "512 B");
        assert_eq!(FileSizeUtils::format_size(1536), "1.50 KB");
        assert_eq!(FileSizeUtils::format_size(3 * 1024 * 1024), "3.00 MB");
    }
}
