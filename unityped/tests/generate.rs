use std::fs;
use std::path::{Path, PathBuf};

use unityped::{Config, Generator, Phase, TypeCatalog, TypeId};
use unityped_ir::{LeafType, MemberDescriptor, TypeDescriptor, TypeKind};

const TAG_MANAGER: &str = "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!78 &1
TagManager:
  serializedVersion: 2
  tags:
  - Player
  layers:
  - Default
  m_SortingLayers:
  - name: Default
    uniqueID: 0
";

fn unity_project(root: &Path) -> PathBuf {
    let scripts = root.join("Packages/com.ruccho.unityped/Runtime/Scripts");
    fs::create_dir_all(&scripts).unwrap();
    fs::create_dir_all(root.join("ProjectSettings")).unwrap();
    fs::write(root.join("ProjectSettings/TagManager.asset"), TAG_MANAGER).unwrap();
    let anchor = scripts.join("ProjectAnchor.cs");
    fs::write(&anchor, "").unwrap();
    anchor
}

fn catalog() -> (TypeCatalog, TypeId) {
    let mut catalog = TypeCatalog::new();
    let float = catalog.leaf(LeafType::Float);
    let player = catalog.insert(
        TypeDescriptor::new("Game", "Player", TypeKind::ExternalObject)
            .with_member(MemberDescriptor::new("speed", float)),
    );
    (catalog, player)
}

#[test]
fn test_generate_writes_views_and_reflection() {
    let dir = tempfile::tempdir().unwrap();
    let anchor = unity_project(dir.path());
    let config: Config = "[output]\ndir = \"Assets/Generated\"\n".parse().unwrap();
    let (catalog, player) = catalog();

    let generator = Generator::new(config).assembly("UniTyped").anchor(anchor);
    let result = generator.generate(&catalog, &[player], dir.path()).unwrap();

    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    let out = dir.path().join("Assets/Generated");
    for file in [
        "UniTyped.Editor.ISerializedPropertyView.g.cs",
        "UniTyped.Editor.SerializedPropertyViewFloat.g.cs",
        "UniTyped.Generated.Game.PlayerView.g.cs",
        "UniTyped.Reflection.ProjectReflection.g.cs",
    ] {
        assert!(out.join(file).is_file(), "missing {file}");
    }
    let reflection =
        fs::read_to_string(out.join("UniTyped.Reflection.ProjectReflection.g.cs")).unwrap();
    assert!(reflection.contains("Player = 0,"));
    assert_eq!(result.stats.written, result.stats.total());

    let again = generator.generate(&catalog, &[player], dir.path()).unwrap();
    assert_eq!(again.stats.written, 0);
    assert_eq!(again.stats.unchanged, result.stats.total());
}

#[test]
fn test_broken_settings_do_not_stop_views() {
    let dir = tempfile::tempdir().unwrap();
    let anchor = unity_project(dir.path());
    fs::write(
        dir.path().join("ProjectSettings/TagManager.asset"),
        "TagManager:\n  tags: [Player\n",
    )
    .unwrap();
    let (catalog, player) = catalog();

    let result = Generator::new(Config::default())
        .assembly("UniTyped")
        .anchor(anchor)
        .generate(&catalog, &[player], dir.path())
        .unwrap();

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].phase, Phase::Reflection);
    assert!(result.diagnostics[0].message.starts_with("failed to parse project settings"));
    let out = dir.path().join("Generated");
    assert!(out.join("UniTyped.Generated.Game.PlayerView.g.cs").is_file());
    assert!(!out.join("UniTyped.Reflection.ProjectReflection.g.cs").exists());
}

#[test]
fn test_config_anchor_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let anchor = unity_project(dir.path());
    let mut config = Config::default();
    config.reflection.anchor = Some(anchor);
    config.views.runtime_support = false;
    let (catalog, player) = catalog();

    let output = Generator::new(config)
        .assembly("UniTyped")
        .preview(&catalog, &[player])
        .unwrap();

    let paths: Vec<_> = output.files.entries().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "UniTyped.Generated.Game.PlayerView.g.cs",
            "UniTyped.Reflection.ProjectReflection.g.cs",
        ]
    );
}
