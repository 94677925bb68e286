//! Recognized CAD file extensions.
//!
//! Maps source file suffixes to a (kind, authoring tool) pair. Anything not
//! in this table is inert: the registry refuses it and the sync/watch paths
//! silently pass it over.

use std::path::Path;

use crate::registry::types::{CadTool, DocumentKind};

/// Classify a path by its extension (case-insensitive).
pub fn recognize(path: &Path) -> Option<(DocumentKind, CadTool)> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    kind_for_extension(&ext)
}

/// Classify a bare extension, without the leading dot.
pub fn kind_for_extension(ext: &str) -> Option<(DocumentKind, CadTool)> {
    use CadTool::{AutoCad, Other, SolidWorks};
    use DocumentKind::{Assembly, Drawing, Piece};

    match ext {
        "sldprt" => Some((Piece, SolidWorks)),
        "sldasm" => Some((Assembly, SolidWorks)),
        "slddrw" => Some((Drawing, SolidWorks)),
        "prt" => Some((Piece, SolidWorks)),
        "asm" => Some((Assembly, SolidWorks)),
        "drw" => Some((Drawing, SolidWorks)),
        "dwg" => Some((Drawing, AutoCad)),
        "dxf" => Some((Drawing, AutoCad)),
        "ipt" => Some((Piece, AutoCad)),
        "iam" => Some((Assembly, AutoCad)),
        "idw" => Some((Drawing, AutoCad)),
        "step" => Some((Piece, Other)),
        "stp" => Some((Piece, Other)),
        "iges" => Some((Piece, Other)),
        "stl" => Some((Piece, Other)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case("bracket.sldprt", DocumentKind::Piece, CadTool::SolidWorks)]
    #[case("frame.SLDASM", DocumentKind::Assembly, CadTool::SolidWorks)]
    #[case("sheet.slddrw", DocumentKind::Drawing, CadTool::SolidWorks)]
    #[case("plate.dwg", DocumentKind::Drawing, CadTool::AutoCad)]
    #[case("profile.DXF", DocumentKind::Drawing, CadTool::AutoCad)]
    #[case("housing.step", DocumentKind::Piece, CadTool::Other)]
    #[case("mesh.stl", DocumentKind::Piece, CadTool::Other)]
    fn recognizes_known_extensions(
        #[case] name: &str,
        #[case] kind: DocumentKind,
        #[case] tool: CadTool,
    ) {
        let path = PathBuf::from("/work").join(name);
        assert_eq!(recognize(&path), Some((kind, tool)));
    }

    #[test]
    fn ignores_unknown_and_missing_extensions() {
        assert_eq!(recognize(Path::new("/work/readme.txt")), None);
        assert_eq!(recognize(Path::new("/work/Makefile")), None);
        assert_eq!(recognize(Path::new("/work/archive.tar.gz")), None);
    }
}
