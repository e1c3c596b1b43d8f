//! Mounted filesystems.

use peekfetch_models::{Fields, Section, SectionKind, TreeItem};
use sysinfo::Disks;

use crate::format::{format_bytes, format_percent, percent_of};

/// Filesystems that never represent real storage.
const PSEUDO_FILESYSTEMS: [&str; 18] = [
    "tmpfs",
    "devtmpfs",
    "devpts",
    "sysfs",
    "proc",
    "cgroup",
    "cgroup2",
    "pstore",
    "bpf",
    "tracefs",
    "debugfs",
    "hugetlbfs",
    "mqueue",
    "configfs",
    "securityfs",
    "fusectl",
    "fuse.portal",
    "squashfs",
];

/// A mounted filesystem, decoupled from sysinfo for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    /// Mount point.
    pub mount_point: String,
    /// Backing device.
    pub device: String,
    /// Filesystem type.
    pub fs_type: String,
    /// Capacity in bytes.
    pub total: u64,
    /// Free bytes.
    pub available: u64,
}

/// Collects the Disk section.
pub fn collect() -> Section {
    let disks = Disks::new_with_refreshed_list();
    let mounts: Vec<Mount> = disks
        .list()
        .iter()
        .map(|disk| Mount {
            mount_point: disk.mount_point().to_string_lossy().into_owned(),
            device: disk.name().to_string_lossy().into_owned(),
            fs_type: disk.file_system().to_string_lossy().into_owned(),
            total: disk.total_space(),
            available: disk.available_space(),
        })
        .collect();

    build_section(&mounts)
}

/// Builds the Disk section, one item per real filesystem.
pub fn build_section(mounts: &[Mount]) -> Section {
    let items = mounts
        .iter()
        .filter(|m| !is_pseudo_filesystem(&m.fs_type) && m.total > 0)
        .enumerate()
        .map(|(i, mount)| {
            let used = mount.total.saturating_sub(mount.available);
            let children = Fields::new()
                .with("Mount", mount.mount_point.as_str())
                .with("Device", mount.device.as_str())
                .with("FS Type", mount.fs_type.as_str())
                .with("Total", format_bytes(mount.total))
                .with("Used", format_bytes(used))
                .with("Free", format_bytes(mount.available))
                .with("Usage", format_percent(percent_of(used, mount.total)));
            TreeItem::new(format!("Partition {}", i + 1), children)
        })
        .collect();

    Section::tree(SectionKind::Disk, items)
}

fn is_pseudo_filesystem(fs_type: &str) -> bool {
    PSEUDO_FILESYSTEMS.contains(&fs_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount(point: &str, fs_type: &str, total: u64, available: u64) -> Mount {
        Mount {
            mount_point: point.to_string(),
            device: format!("/dev/{}", point.trim_start_matches('/')),
            fs_type: fs_type.to_string(),
            total,
            available,
        }
    }

    #[test]
    fn test_pseudo_filesystems_skipped() {
        let section = build_section(&[
            mount("/", "ext4", 100, 25),
            mount("/run", "tmpfs", 100, 100),
            mount("/home", "btrfs", 200, 200),
        ]);

        let items = section.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Partition 1");
        assert_eq!(items[1].name, "Partition 2");
        assert_eq!(items[1].children.get("Mount"), Some("/home"));
    }

    #[test]
    fn test_partition_children() {
        let section = build_section(&[mount("/", "ext4", 1024, 256)]);
        let children = &section.items().unwrap()[0].children;

        let keys: Vec<&str> = children.keys().collect();
        assert_eq!(
            keys,
            vec!["Mount", "Device", "FS Type", "Total", "Used", "Free", "Usage"]
        );
        assert_eq!(children.get("Usage"), Some("75.0%"));
        assert_eq!(children.get("Used"), Some("768 B"));
    }

    #[test]
    fn test_disk_section_is_not_live() {
        let section = build_section(&[]);
        assert!(!section.live);
        assert!(section.is_empty());
    }
}
