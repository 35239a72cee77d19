//! # Capacidad de Filesystem
//! src/fs/mod.rs
//!
//! El núcleo del servidor no toca el filesystem directamente: depende de
//! la capacidad `FileStore` (listar hijos, leer, escribir, tamaño). La
//! implementación real es `DiskStore`, anclada al directorio servido; los
//! tests del router usan una implementación en memoria.
//!
//! Aquí vive también el validador de rutas para `GET /files/*`.

use std::io;
use std::path::{Path, PathBuf};

/// Capacidad abstracta sobre el directorio servido
///
/// Todos los nombres son relativos al directorio raíz del store.
pub trait FileStore {
    /// Lista los hijos inmediatos del directorio (no recursivo)
    fn list_children(&self) -> io::Result<Vec<String>>;

    /// Lee el contenido completo de un archivo
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Escribe (crea o sobrescribe) un archivo
    fn write_file(&self, name: &str, data: &[u8]) -> io::Result<()>;

    /// Tamaño en bytes de un archivo
    fn file_size(&self, name: &str) -> io::Result<u64>;

    /// Verifica si el nombre resuelve a un archivo regular legible
    fn is_file(&self, name: &str) -> bool;

    /// Ruta resultante de unir el nombre al directorio raíz
    fn join(&self, name: &str) -> PathBuf;
}

/// Implementación de `FileStore` sobre un directorio real en disco
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Crea un store anclado al directorio indicado
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directorio raíz del store
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileStore for DiskStore {
    fn list_children(&self) -> io::Result<Vec<String>> {
        let mut children = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            children.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(children)
    }

    fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.join(name))
    }

    fn write_file(&self, name: &str, data: &[u8]) -> io::Result<()> {
        std::fs::write(self.join(name), data)
    }

    fn file_size(&self, name: &str) -> io::Result<u64> {
        Ok(std::fs::metadata(self.join(name))?.len())
    }

    fn is_file(&self, name: &str) -> bool {
        self.join(name).is_file()
    }

    fn join(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Valida un nombre de archivo para `GET /files/*`
///
/// El nombre debe ser exactamente uno de los hijos inmediatos del
/// directorio servido y resolver a un archivo regular. Retorna la ruta
/// unida en caso de éxito.
///
/// Nota: esto es un listado plano, no una canonicalización general. Un
/// nombre con separador (`sub/archivo.txt`) no coincide con ningún hijo
/// inmediato y se rechaza como subproducto, y `..` se rechaza porque no
/// resuelve a un archivo regular listado. Este validador se usa solo en
/// la ruta de lectura; la escritura no lo consulta.
pub fn validate(store: &dyn FileStore, name: &str) -> Option<PathBuf> {
    let children = store.list_children().ok()?;

    if !children.iter().any(|child| child == name) {
        return None;
    }

    if !store.is_file(name) {
        return None;
    }

    Some(store.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Crea un directorio temporal único para el test
    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "http_file_server_fs_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn test_disk_store_write_then_read() {
        let dir = temp_dir("rw");
        let store = DiskStore::new(&dir);

        store.write_file("data.bin", &[0x00, 0xFF, 0x10]).unwrap();

        assert_eq!(store.read_file("data.bin").unwrap(), vec![0x00, 0xFF, 0x10]);
        assert_eq!(store.file_size("data.bin").unwrap(), 3);
        assert!(store.is_file("data.bin"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_disk_store_overwrite() {
        let dir = temp_dir("overwrite");
        let store = DiskStore::new(&dir);

        store.write_file("f.txt", b"first").unwrap();
        store.write_file("f.txt", b"second").unwrap();

        assert_eq!(store.read_file("f.txt").unwrap(), b"second");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_disk_store_list_children() {
        let dir = temp_dir("list");
        let store = DiskStore::new(&dir);

        store.write_file("a.txt", b"a").unwrap();
        store.write_file("b.txt", b"b").unwrap();
        std::fs::create_dir(dir.join("subdir")).unwrap();

        let mut children = store.list_children().unwrap();
        children.sort();
        assert_eq!(children, vec!["a.txt", "b.txt", "subdir"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_validate_accepts_present_file() {
        let dir = temp_dir("valid_ok");
        let store = DiskStore::new(&dir);
        store.write_file("hello.txt", b"hi").unwrap();

        let path = validate(&store, "hello.txt").expect("file should validate");
        assert_eq!(path, dir.join("hello.txt"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let dir = temp_dir("valid_missing");
        let store = DiskStore::new(&dir);

        assert!(validate(&store, "nope.txt").is_none());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_validate_rejects_name_with_separator() {
        let dir = temp_dir("valid_sep");
        let store = DiskStore::new(&dir);
        std::fs::create_dir(dir.join("sub")).unwrap();
        store.write_file("sub/inner.txt", b"x").unwrap();

        // "sub/inner.txt" existe en disco pero no es hijo inmediato
        assert!(validate(&store, "sub/inner.txt").is_none());
        assert!(validate(&store, "../escape").is_none());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_validate_rejects_directory() {
        let dir = temp_dir("valid_dir");
        let store = DiskStore::new(&dir);
        std::fs::create_dir(dir.join("sub")).unwrap();

        // "sub" es hijo inmediato pero no un archivo regular
        assert!(validate(&store, "sub").is_none());

        std::fs::remove_dir_all(&dir).ok();
    }
}
