use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("songs.rs");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let songs_dir = Path::new(&manifest_dir).join("songs");

    let mut code = String::new();
    code.push_str("/// Embedded song files: (name, YAML source)\n");
    code.push_str("pub static SONGS: &[(&str, &str)] = &[\n");

    if songs_dir.exists() {
        for entry in WalkDir::new(&songs_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "yaml"))
        {
            let path = entry.path();
            let name = path.file_stem().unwrap().to_string_lossy();
            code.push_str(&format!(
                "    ({:?}, include_str!({:?})),\n",
                name,
                path.display().to_string()
            ));
        }
    }

    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    println!("cargo:rerun-if-changed=songs");
}
