//! The filesystem: tree owner, path binder, channel vendor.
//!
//! A [`MemoryFs`] owns one entry tree behind a coarse `RwLock`: create,
//! delete, move and copy take the write lock, while lookups, attribute
//! queries and directory streaming share the read lock. Channel
//! operations never touch the tree lock, so no operation ever holds
//! both a tree lock and a channel lock.
//!
//! Every [`FsPath`] handed out by [`MemoryFs::path`] carries this
//! instance's identity; paths bound to another instance are rejected
//! with [`FsError::FilesystemMismatch`]. Relative paths resolve against
//! the root.

use crate::attributes::{FileAttributes, FileKind};
use crate::buffer::ContentBuffer;
use crate::channel::ByteChannel;
use crate::error::{FsError, Result};
use crate::path::{FsId, FsPath, SEPARATOR};
use crate::tree::{new_directory, new_file, EntryId, EntryTree};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Options for [`MemoryFs::move_entry`] and [`MemoryFs::copy_entry`].
///
/// # Examples
///
/// ```
/// use memfs_core::TransferOptions;
///
/// let overwrite = TransferOptions::replacing();
/// assert!(overwrite.replace_existing);
/// assert!(!TransferOptions::default().replace_existing);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferOptions {
    /// Allow the target to be overwritten when it already exists.
    pub replace_existing: bool,
}

impl TransferOptions {
    /// Options that permit overwriting an existing target.
    #[must_use]
    pub const fn replacing() -> Self {
        Self {
            replace_existing: true,
        }
    }
}

/// An ordered, finite, non-restartable stream of a directory's
/// immediate children, in insertion order.
#[derive(Debug)]
pub struct DirStream {
    entries: std::vec::IntoIter<FsPath>,
}

impl Iterator for DirStream {
    type Item = FsPath;

    fn next(&mut self) -> Option<FsPath> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for DirStream {}

/// An in-memory filesystem instance.
///
/// # Examples
///
/// ```
/// use memfs_core::MemoryFs;
///
/// let fs = MemoryFs::new("scratch");
/// fs.create_directories(&fs.path("/a/b")?)?;
///
/// let children: Vec<String> = fs
///     .directory_stream(&fs.path("/a")?)?
///     .map(|p| p.to_string())
///     .collect();
/// assert_eq!(children, ["/a/b"]);
/// # Ok::<(), memfs_core::FsError>(())
/// ```
#[derive(Debug)]
pub struct MemoryFs {
    id: String,
    instance: FsId,
    tree: RwLock<EntryTree>,
    open: AtomicBool,
}

impl MemoryFs {
    /// Creates an empty filesystem registered under `id`, holding only
    /// the root directory.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            instance: FsId::new(),
            tree: RwLock::new(EntryTree::new()),
            open: AtomicBool::new(true),
        }
    }

    /// The external identifier this instance was created under.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The identity tag carried by every path of this instance.
    #[must_use]
    pub const fn instance(&self) -> FsId {
        self.instance
    }

    /// The path separator token; never empty.
    #[must_use]
    pub const fn separator(&self) -> &'static str {
        SEPARATOR
    }

    /// Returns `true` until [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    /// Always `false`: in-memory filesystems are writable.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        false
    }

    /// Marks the filesystem closed. Idempotent; the tree stays intact
    /// so a registry can drop the instance at its own pace.
    ///
    /// Closing does not free the external identifier: a registry holding
    /// this instance keeps the name reserved until the entry is removed
    /// there, so reopening under the same identifier requires removal
    /// first.
    pub fn close(&self) {
        self.open.store(false, Ordering::Release);
    }

    /// Parses `raw` into a path bound to this instance.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::InvalidArgument`] for malformed path text.
    pub fn path(&self, raw: &str) -> Result<FsPath> {
        FsPath::parse(raw, self.instance)
    }

    /// Returns the root path of this instance.
    #[must_use]
    pub const fn root_path(&self) -> FsPath {
        FsPath::root_for(self.instance)
    }

    /// Returns `true` if `path` resolves to an existing entry.
    ///
    /// Absence is not an error here; callers decide what absence means.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::FilesystemMismatch`] for a foreign path.
    pub fn exists(&self, path: &FsPath) -> Result<bool> {
        self.check_instance(path)?;
        Ok(self.read_tree().lookup(path.segments()).is_some())
    }

    /// Creates a single directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] when the parent does not exist (or
    /// is not a directory), and [`FsError::AlreadyExists`] when the
    /// parent already has a child with that name (or `path` is the
    /// root).
    pub fn create_directory(&self, path: &FsPath) -> Result<()> {
        self.check_instance(path)?;
        let mut tree = self.write_tree();
        let (parent, name) = Self::locate_parent(&tree, path)?;
        if tree.child(parent, name).is_some() {
            return Err(FsError::already_exists(path));
        }
        tree.insert(parent, name.to_string(), new_directory());
        debug!(path = %path, "created directory");
        Ok(())
    }

    /// Creates every missing directory along `path`, then the target.
    ///
    /// Idempotent when the target already exists as a directory.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::AlreadyExists`] when an existing element
    /// along the path is not a directory.
    pub fn create_directories(&self, path: &FsPath) -> Result<()> {
        self.check_instance(path)?;
        let mut tree = self.write_tree();
        let mut current = EntryTree::root();
        for (depth, segment) in path.segments().iter().enumerate() {
            current = match tree.child(current, segment) {
                Some(existing) if tree.node(existing).is_directory() => existing,
                Some(_) => {
                    let collision = path.segments()[..=depth].join(SEPARATOR);
                    return Err(FsError::already_exists(&format!("/{collision}")));
                }
                None => {
                    let id = tree.insert(current, segment.clone(), new_directory());
                    debug!(segment = %segment, "created intermediate directory");
                    id
                }
            };
        }
        Ok(())
    }

    /// Creates an empty regular file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] when the parent does not exist and
    /// [`FsError::AlreadyExists`] on a name collision.
    pub fn create_file(&self, path: &FsPath) -> Result<()> {
        self.check_instance(path)?;
        let mut tree = self.write_tree();
        let (parent, name) = Self::locate_parent(&tree, path)?;
        if tree.child(parent, name).is_some() {
            return Err(FsError::already_exists(path));
        }
        tree.insert(parent, name.to_string(), new_file(ContentBuffer::empty()));
        debug!(path = %path, "created file");
        Ok(())
    }

    /// Deletes the entry at `path` and detaches it from its parent.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] when nothing resolves,
    /// [`FsError::DirectoryNotEmpty`] for a directory that still has
    /// children, and [`FsError::InvalidArgument`] for the root.
    pub fn delete(&self, path: &FsPath) -> Result<()> {
        self.check_instance(path)?;
        let mut tree = self.write_tree();
        let id = tree
            .lookup(path.segments())
            .ok_or_else(|| FsError::not_found(path))?;
        if id == EntryTree::root() {
            return Err(FsError::invalid("cannot delete the root directory"));
        }
        if tree.node(id).is_directory() && tree.child_count(id) > 0 {
            return Err(FsError::DirectoryNotEmpty {
                path: path.to_string(),
            });
        }
        tree.remove(id);
        debug!(path = %path, "deleted entry");
        Ok(())
    }

    /// Relocates the subtree rooted at `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] when `source` (or `target`'s
    /// parent) is absent, [`FsError::AlreadyExists`] when `target`
    /// exists and `options` forbid overwrite,
    /// [`FsError::DirectoryNotEmpty`] when the overwritten target is a
    /// non-empty directory, and [`FsError::InvalidArgument`] when the
    /// move would place a directory inside itself or move the root.
    pub fn move_entry(&self, source: &FsPath, target: &FsPath, options: TransferOptions) -> Result<()> {
        self.check_instance(source)?;
        self.check_instance(target)?;
        let mut tree = self.write_tree();
        let source_id = tree
            .lookup(source.segments())
            .ok_or_else(|| FsError::not_found(source))?;
        if source_id == EntryTree::root() {
            return Err(FsError::invalid("cannot move the root directory"));
        }
        let (target_parent, target_name) = Self::locate_parent(&tree, target)?;
        if Self::is_same_or_descendant(&tree, source_id, target_parent) {
            return Err(FsError::invalid(format!(
                "cannot move {source} into its own subtree"
            )));
        }
        if let Some(existing) = tree.child(target_parent, target_name) {
            if existing == source_id {
                return Ok(());
            }
            Self::displace(&mut tree, existing, target, options)?;
        }
        tree.detach(source_id);
        tree.attach(source_id, target_parent, target_name.to_string());
        debug!(source = %source, target = %target, "moved entry");
        Ok(())
    }

    /// Duplicates the entry at `source` to `target`, leaving `source`
    /// intact.
    ///
    /// A file copy duplicates the content buffer into a fully
    /// independent instance; a directory copies as a fresh empty
    /// directory.
    ///
    /// # Errors
    ///
    /// Same contract as [`move_entry`](Self::move_entry), except that
    /// copying an entry onto itself is a no-op.
    pub fn copy_entry(&self, source: &FsPath, target: &FsPath, options: TransferOptions) -> Result<()> {
        self.check_instance(source)?;
        self.check_instance(target)?;
        let mut tree = self.write_tree();
        let source_id = tree
            .lookup(source.segments())
            .ok_or_else(|| FsError::not_found(source))?;
        let (target_parent, target_name) = Self::locate_parent(&tree, target)?;
        let kind = match tree.node(source_id).file_data() {
            Some(data) => {
                let copied = data
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone();
                new_file(copied)
            }
            None => new_directory(),
        };
        if let Some(existing) = tree.child(target_parent, target_name) {
            if existing == source_id {
                return Ok(());
            }
            Self::displace(&mut tree, existing, target, options)?;
        }
        tree.insert(target_parent, target_name.to_string(), kind);
        debug!(source = %source, target = %target, "copied entry");
        Ok(())
    }

    /// Streams the immediate children of the directory at `path`, in
    /// insertion order. The stream is finite and cannot be restarted.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] when nothing resolves and
    /// [`FsError::InvalidArgument`] when `path` is not a directory.
    pub fn directory_stream(&self, path: &FsPath) -> Result<DirStream> {
        self.check_instance(path)?;
        let tree = self.read_tree();
        let id = tree
            .lookup(path.segments())
            .ok_or_else(|| FsError::not_found(path))?;
        let children = tree
            .children(id)
            .ok_or_else(|| FsError::invalid(format!("not a directory: {path}")))?;
        let entries: Vec<FsPath> = children
            .iter()
            .filter_map(|child| tree.node(*child).name())
            .map(|name| path.resolve_str(name))
            .collect::<Result<_>>()?;
        Ok(DirStream {
            entries: entries.into_iter(),
        })
    }

    /// Returns the basic attribute view for the entry at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] when nothing resolves.
    pub fn attributes(&self, path: &FsPath) -> Result<FileAttributes> {
        self.check_instance(path)?;
        let tree = self.read_tree();
        let id = tree
            .lookup(path.segments())
            .ok_or_else(|| FsError::not_found(path))?;
        let kind = if tree.node(id).is_directory() {
            FileKind::Directory
        } else {
            FileKind::Regular
        };
        Ok(FileAttributes::new(kind, tree.size_of(id)))
    }

    /// Returns the attribute view named `view` for the entry at `path`.
    ///
    /// Only the `"basic"` view exists.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::Unsupported`] for any other view name.
    pub fn attributes_view(&self, path: &FsPath, view: &str) -> Result<FileAttributes> {
        if view != "basic" {
            return Err(FsError::Unsupported {
                operation: format!("attribute view '{view}'"),
            });
        }
        self.attributes(path)
    }

    /// Watch registration is not provided by this in-memory design.
    ///
    /// # Errors
    ///
    /// Always returns [`FsError::Unsupported`].
    pub fn watch(&self, _path: &FsPath) -> Result<()> {
        Err(FsError::Unsupported {
            operation: "watch registration".to_string(),
        })
    }

    /// Opens a read channel over the file at `path`, positioned at 0.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] when nothing resolves and
    /// [`FsError::InvalidArgument`] when `path` is a directory.
    pub fn open_read(&self, path: &FsPath) -> Result<ByteChannel> {
        self.check_instance(path)?;
        let tree = self.read_tree();
        let id = tree
            .lookup(path.segments())
            .ok_or_else(|| FsError::not_found(path))?;
        let data = tree
            .node(id)
            .file_data()
            .ok_or_else(|| FsError::invalid(format!("not a regular file: {path}")))?;
        Ok(ByteChannel::read_only(data))
    }

    /// Opens a write channel over the file at `path`, creating the file
    /// when absent.
    ///
    /// Without `append` the existing content is truncated to size 0 and
    /// the position starts at 0; with `append` the position starts at
    /// the current size.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] when the file is absent and its
    /// parent does not exist, and [`FsError::InvalidArgument`] when
    /// `path` is a directory.
    pub fn open_write(&self, path: &FsPath, append: bool) -> Result<ByteChannel> {
        self.check_instance(path)?;
        let mut tree = self.write_tree();
        let id = match tree.lookup(path.segments()) {
            Some(id) => id,
            None => {
                let (parent, name) = Self::locate_parent(&tree, path)?;
                debug!(path = %path, "created file for writing");
                tree.insert(parent, name.to_string(), new_file(ContentBuffer::empty()))
            }
        };
        let data = tree
            .node(id)
            .file_data()
            .ok_or_else(|| FsError::invalid(format!("not a regular file: {path}")))?;
        Ok(ByteChannel::writable(data, append))
    }

    fn check_instance(&self, path: &FsPath) -> Result<()> {
        if path.filesystem() == self.instance {
            Ok(())
        } else {
            Err(FsError::FilesystemMismatch)
        }
    }

    /// Splits `path` into its parent directory's id and final name.
    fn locate_parent<'p>(tree: &EntryTree, path: &'p FsPath) -> Result<(EntryId, &'p str)> {
        let segments = path.segments();
        let (name, ancestors) = segments
            .split_last()
            .ok_or_else(|| FsError::already_exists(path))?;
        let parent = tree
            .lookup(ancestors)
            .filter(|id| tree.node(*id).is_directory())
            .ok_or_else(|| FsError::not_found(path))?;
        Ok((parent, name.as_str()))
    }

    /// Removes an entry standing in the way of a move or copy target.
    fn displace(
        tree: &mut EntryTree,
        existing: EntryId,
        target: &FsPath,
        options: TransferOptions,
    ) -> Result<()> {
        if !options.replace_existing {
            return Err(FsError::already_exists(target));
        }
        if tree.node(existing).is_directory() && tree.child_count(existing) > 0 {
            return Err(FsError::DirectoryNotEmpty {
                path: target.to_string(),
            });
        }
        tree.remove(existing);
        Ok(())
    }

    fn is_same_or_descendant(tree: &EntryTree, ancestor: EntryId, candidate: EntryId) -> bool {
        let mut current = Some(candidate);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = tree.node(id).parent();
        }
        false
    }

    fn read_tree(&self) -> RwLockReadGuard<'_, EntryTree> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tree(&self) -> RwLockWriteGuard<'_, EntryTree> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fs() -> MemoryFs {
        MemoryFs::new("test")
    }

    #[test]
    fn filesystem_and_channels_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemoryFs>();
        assert_send_sync::<ByteChannel>();
    }

    #[test]
    fn exposed_properties() {
        let fs = fs();
        assert_eq!(fs.id(), "test");
        assert_eq!(fs.separator(), "/");
        assert!(fs.is_open());
        assert!(!fs.is_read_only());
        fs.close();
        assert!(!fs.is_open());
        fs.close();
        assert!(!fs.is_open());
    }

    #[test]
    fn paths_are_bound_to_the_instance() {
        let fs1 = fs();
        let fs2 = fs();
        let foreign = fs2.path("/a").unwrap();
        assert!(fs1.exists(&foreign).unwrap_err().is_mismatch());
        assert!(fs1.create_directory(&foreign).unwrap_err().is_mismatch());
    }

    #[test]
    fn create_directory_requires_parent() {
        let fs = fs();
        let deep = fs.path("/a/b").unwrap();
        assert!(fs.create_directory(&deep).unwrap_err().is_not_found());

        fs.create_directory(&fs.path("/a").unwrap()).unwrap();
        fs.create_directory(&deep).unwrap();
        assert!(fs.exists(&deep).unwrap());
    }

    #[test]
    fn create_directory_rejects_collision_and_root() {
        let fs = fs();
        let a = fs.path("/a").unwrap();
        fs.create_directory(&a).unwrap();
        assert!(fs.create_directory(&a).unwrap_err().is_already_exists());
        let root = fs.root_path();
        assert!(fs.create_directory(&root).unwrap_err().is_already_exists());
    }

    #[test]
    fn create_directories_is_idempotent() {
        let fs = fs();
        let path = fs.path("/a/b/c").unwrap();
        fs.create_directories(&path).unwrap();
        fs.create_directories(&path).unwrap();
        assert!(fs.exists(&path).unwrap());
        fs.create_directories(&fs.root_path()).unwrap();
    }

    #[test]
    fn create_directories_rejects_file_on_the_way() {
        let fs = fs();
        fs.create_file(&fs.path("/a").unwrap()).unwrap();
        let err = fs.create_directories(&fs.path("/a/b").unwrap()).unwrap_err();
        assert!(err.is_already_exists());
    }

    #[test]
    fn created_file_is_empty() {
        let fs = fs();
        let file = fs.path("/data").unwrap();
        fs.create_file(&file).unwrap();
        let attrs = fs.attributes(&file).unwrap();
        assert!(attrs.is_regular_file());
        assert_eq!(attrs.size(), 0);
        assert!(fs.create_file(&file).unwrap_err().is_already_exists());
    }

    #[test]
    fn delete_missing_entry_is_not_found() {
        let fs = fs();
        let missing = fs.path("/missing").unwrap();
        assert!(fs.delete(&missing).unwrap_err().is_not_found());
    }

    #[test]
    fn delete_refuses_non_empty_directory() {
        let fs = fs();
        fs.create_directories(&fs.path("/a/b").unwrap()).unwrap();
        let a = fs.path("/a").unwrap();
        assert!(fs.delete(&a).unwrap_err().is_not_empty());
        fs.delete(&fs.path("/a/b").unwrap()).unwrap();
        fs.delete(&a).unwrap();
        assert!(!fs.exists(&a).unwrap());
    }

    #[test]
    fn delete_refuses_root() {
        let fs = fs();
        assert!(fs.delete(&fs.root_path()).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn move_relocates_a_subtree() {
        let fs = fs();
        fs.create_directories(&fs.path("/a/b").unwrap()).unwrap();
        fs.create_directory(&fs.path("/target").unwrap()).unwrap();

        fs.move_entry(
            &fs.path("/a").unwrap(),
            &fs.path("/target/moved").unwrap(),
            TransferOptions::default(),
        )
        .unwrap();

        assert!(!fs.exists(&fs.path("/a").unwrap()).unwrap());
        assert!(fs.exists(&fs.path("/target/moved/b").unwrap()).unwrap());
    }

    #[test]
    fn move_respects_overwrite_options() {
        let fs = fs();
        fs.create_file(&fs.path("/src").unwrap()).unwrap();
        fs.create_file(&fs.path("/dst").unwrap()).unwrap();

        let src = fs.path("/src").unwrap();
        let dst = fs.path("/dst").unwrap();
        let err = fs.move_entry(&src, &dst, TransferOptions::default()).unwrap_err();
        assert!(err.is_already_exists());

        fs.move_entry(&src, &dst, TransferOptions::replacing()).unwrap();
        assert!(!fs.exists(&src).unwrap());
        assert!(fs.exists(&dst).unwrap());
    }

    #[test]
    fn move_missing_source_is_not_found() {
        let fs = fs();
        let err = fs
            .move_entry(
                &fs.path("/missing").unwrap(),
                &fs.path("/anywhere").unwrap(),
                TransferOptions::default(),
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn move_into_own_subtree_rejected() {
        let fs = fs();
        fs.create_directories(&fs.path("/a/b").unwrap()).unwrap();
        let err = fs
            .move_entry(
                &fs.path("/a").unwrap(),
                &fs.path("/a/b/inner").unwrap(),
                TransferOptions::default(),
            )
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn copy_duplicates_file_content_independently() {
        let fs = fs();
        let src = fs.path("/src").unwrap();
        let channel = fs.open_write(&src, false).unwrap();
        channel.write(&[1, 2, 3]).unwrap();
        channel.close();

        let dst = fs.path("/dst").unwrap();
        fs.copy_entry(&src, &dst, TransferOptions::default()).unwrap();
        assert!(fs.exists(&src).unwrap());
        assert_eq!(fs.attributes(&dst).unwrap().size(), 3);

        // mutating the copy leaves the source untouched
        let writer = fs.open_write(&dst, true).unwrap();
        writer.write(&[4]).unwrap();
        assert_eq!(fs.attributes(&src).unwrap().size(), 3);
        assert_eq!(fs.attributes(&dst).unwrap().size(), 4);
    }

    #[test]
    fn copy_directory_creates_fresh_empty_directory() {
        let fs = fs();
        fs.create_directories(&fs.path("/a/b").unwrap()).unwrap();
        fs.copy_entry(
            &fs.path("/a").unwrap(),
            &fs.path("/c").unwrap(),
            TransferOptions::default(),
        )
        .unwrap();
        let attrs = fs.attributes(&fs.path("/c").unwrap()).unwrap();
        assert!(attrs.is_directory());
        assert_eq!(fs.directory_stream(&fs.path("/c").unwrap()).unwrap().len(), 0);
    }

    #[test]
    fn directory_stream_keeps_creation_order() {
        let fs = fs();
        fs.create_directories(&fs.path("/a/b").unwrap()).unwrap();
        fs.create_directories(&fs.path("/c/d").unwrap()).unwrap();

        let root_children: Vec<String> = fs
            .directory_stream(&fs.root_path())
            .unwrap()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(root_children, ["/a", "/c"]);

        let a_children: Vec<String> = fs
            .directory_stream(&fs.path("/a").unwrap())
            .unwrap()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(a_children, ["/a/b"]);
    }

    #[test]
    fn directory_stream_rejects_files() {
        let fs = fs();
        fs.create_file(&fs.path("/file").unwrap()).unwrap();
        let err = fs.directory_stream(&fs.path("/file").unwrap()).unwrap_err();
        assert!(err.is_invalid_argument());
        let err = fs.directory_stream(&fs.path("/missing").unwrap()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn root_attributes_are_directory_attributes() {
        let fs = fs();
        let attrs = fs.attributes(&fs.root_path()).unwrap();
        assert!(attrs.is_directory());
        assert!(!attrs.is_regular_file());
        assert!(!attrs.is_symbolic_link());
        assert!(!attrs.is_other());
        assert_eq!(attrs.size(), 0);
    }

    #[test]
    fn only_basic_attribute_view_supported() {
        let fs = fs();
        let root = fs.root_path();
        assert!(fs.attributes_view(&root, "basic").is_ok());
        assert!(fs.attributes_view(&root, "posix").unwrap_err().is_unsupported());
        assert!(fs.watch(&root).unwrap_err().is_unsupported());
    }

    #[test]
    fn open_write_creates_and_truncates() {
        let fs = fs();
        let file = fs.path("/log").unwrap();
        let writer = fs.open_write(&file, false).unwrap();
        writer.write(b"hello").unwrap();
        writer.close();
        assert_eq!(fs.attributes(&file).unwrap().size(), 5);

        // reopening without append truncates to zero first
        let writer = fs.open_write(&file, false).unwrap();
        assert_eq!(writer.size().unwrap(), 0);
        writer.write(b"ab").unwrap();
        writer.close();
        assert_eq!(fs.attributes(&file).unwrap().size(), 2);
    }

    #[test]
    fn open_write_append_continues_at_end() {
        let fs = fs();
        let file = fs.path("/log").unwrap();
        let writer = fs.open_write(&file, false).unwrap();
        writer.write(b"ab").unwrap();
        writer.close();

        let appender = fs.open_write(&file, true).unwrap();
        assert_eq!(appender.position().unwrap(), 2);
        appender.write(b"cd").unwrap();
        appender.close();

        let reader = fs.open_read(&file).unwrap();
        let mut out = [0u8; 4];
        assert_eq!(reader.read(&mut out).unwrap(), Some(4));
        assert_eq!(&out, b"abcd");
    }

    #[test]
    fn open_read_requires_existing_file() {
        let fs = fs();
        assert!(fs.open_read(&fs.path("/missing").unwrap()).unwrap_err().is_not_found());
        fs.create_directory(&fs.path("/dir").unwrap()).unwrap();
        assert!(fs
            .open_read(&fs.path("/dir").unwrap())
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn open_write_requires_existing_parent() {
        let fs = fs();
        let orphan = fs.path("/no/parent").unwrap();
        assert!(fs.open_write(&orphan, false).unwrap_err().is_not_found());
    }

    #[test]
    fn relative_paths_resolve_against_root() {
        let fs = fs();
        fs.create_directory(&fs.path("a").unwrap()).unwrap();
        assert!(fs.exists(&fs.path("/a").unwrap()).unwrap());
        assert!(fs.exists(&fs.path("a").unwrap()).unwrap());
    }
}
