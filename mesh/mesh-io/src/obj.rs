//! Wavefront OBJ support (vertices and triangular faces only).
//!
//! # Format
//!
//! ```text
//! v x y z
//! ...
//! f a b c
//! ...
//! ```
//!
//! Face indices are 1-based and refer to `v` lines in file order, the same
//! convention as [`IndexedMesh::faces`]. No normals, texture coordinates,
//! materials or comments are written.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use mesh_types::{IndexedMesh, Point3};
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Write `mesh` as OBJ text to `writer`.
///
/// Coordinates use Rust's shortest round-trip float formatting, so reading
/// the text back yields bit-identical values.
///
/// # Errors
///
/// Returns an error if the writer fails.
///
/// # Example
///
/// ```
/// use mesh_io::write_obj;
/// use mesh_types::{IndexedMesh, Point3};
///
/// let mesh = IndexedMesh::from_parts(
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.5, 0.0)],
///     vec![[1, 2, 3]],
/// );
///
/// let mut out = Vec::new();
/// write_obj(&mesh, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "v 0 0 0\nv 1 0 0\nv 0 1.5 0\nf 1 2 3\n");
/// ```
pub fn write_obj<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> IoResult<()> {
    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for [a, b, c] in &mesh.faces {
        writeln!(writer, "f {a} {b} {c}")?;
    }
    Ok(())
}

/// Save a mesh to an OBJ file, creating or replacing `path`.
///
/// The mesh is written to a temporary file in the same directory and renamed
/// onto `path` once complete, so a failed write never leaves a truncated
/// mesh behind. A replaced file keeps its permissions; a new file gets the
/// usual `0o666` masked by the process umask, as `File::create` would.
///
/// # Errors
///
/// Returns an error if the directory is not writable or the write fails.
pub fn save_obj<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = temp_file_for(path, dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write_obj(mesh, &mut writer)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| IoError::Io(e.error))?;

    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Saved OBJ"
    );

    Ok(())
}

/// Temporary file in `dir` whose permissions match what `path` should end
/// up with.
fn temp_file_for(path: &Path, dir: &Path) -> IoResult<NamedTempFile> {
    let existing = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    if existing.is_none() {
        use std::os::unix::fs::PermissionsExt;
        // Mode passed to open(2), so the umask still applies
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let temp = builder.tempfile_in(dir)?;

    if let Some(permissions) = existing {
        temp.as_file().set_permissions(permissions)?;
    }
    Ok(temp)
}

/// Load a mesh from an OBJ file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid OBJ as
/// described in [`read_obj`].
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    read_obj(BufReader::new(file))
}

/// Parse OBJ text into a mesh.
///
/// Reads `v` and `f` lines. Blank lines, `#` comments and every other
/// statement (`vn`, `vt`, `o`, `g`, ...) are skipped. Face corners may use the
/// `v/vt/vn` form; only the vertex index is kept. Faces must be triangles with
/// positive, in-range indices.
///
/// # Errors
///
/// Returns [`IoError::InvalidContent`] for malformed statements, or a parse
/// error for bad numbers.
pub fn read_obj<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("v") => {
                let coords = parts
                    .take(3)
                    .map(str::parse::<f64>)
                    .collect::<Result<Vec<_>, _>>()?;
                let [x, y, z] = coords[..] else {
                    return Err(IoError::invalid_content(
                        line_no,
                        "vertex needs three coordinates",
                    ));
                };
                mesh.vertices.push(Point3::new(x, y, z));
            }
            Some("f") => {
                let corners = parts
                    .map(|token| parse_corner(token, line_no))
                    .collect::<IoResult<Vec<_>>>()?;
                let [a, b, c] = corners[..] else {
                    return Err(IoError::invalid_content(
                        line_no,
                        format!("expected a triangle, got {} corners", corners.len()),
                    ));
                };
                mesh.faces.push([a, b, c]);
            }
            _ => {}
        }
    }

    if let Some(max) = mesh.max_face_index() {
        if max as usize > mesh.vertex_count() {
            return Err(IoError::IndexOutOfRange {
                index: max,
                vertices: mesh.vertex_count(),
            });
        }
    }

    Ok(mesh)
}

fn parse_corner(token: &str, line_no: usize) -> IoResult<u32> {
    let vertex = token.split('/').next().unwrap_or(token);
    let index: u32 = vertex.parse()?;
    if index == 0 {
        return Err(IoError::invalid_content(line_no, "face index 0"));
    }
    Ok(index)
}
