//! The `UniTyped.Reflection` unit: enums and tables for project metadata.

use unityped_codegen::builder::Indent;
use unityped_codegen::csharp::{
    DeclKind, EnumDecl, FieldDecl, MethodDecl, Namespace, SourceFile, TypeDecl,
};
use unityped_codegen::views::naming::hint_name;
use unityped_codegen::{FileCategory, SourceUnit};
use unityped_core::{IdentifierSet, to_verbatim_literal};

use crate::document::ProjectMetadata;

const LAYER_INFO: &str = "LayerInfo";
const LAYER_INFOS: &str = "LayerInfos";
const LAYER_MASK: &str = "global::UnityEngine.LayerMask";

/// Render the reflection unit for `metadata` into `namespace`.
pub fn reflection_unit(metadata: &ProjectMetadata, namespace: &str, indent: Indent) -> SourceUnit {
    let tag_idents = idents(IdentifierSet::new(), metadata.tags.iter());
    let layer_idents = {
        let mut scope = IdentifierSet::new();
        scope.reserve("All");
        scope.reserve(LAYER_INFOS);
        idents(scope, metadata.layers.iter().map(|l| &l.name))
    };
    let sorting_idents = idents(
        IdentifierSet::new(),
        metadata.sorting_layers.iter().map(|l| &l.name),
    );

    let mut tags = EnumDecl::new("Tags");
    for (i, ident) in tag_idents.iter().enumerate() {
        tags = tags.variant(ident, i);
    }

    let tag_data = TypeDecl::new(DeclKind::StaticClass, "TagData")
        .internal()
        .member(
            FieldDecl::new("string[]", "tagNames")
                .modifiers("public static readonly")
                .elements(metadata.tags.iter().map(|t| to_verbatim_literal(t))),
        );

    let mut layers = EnumDecl::new("Layers");
    let mut layer_infos = TypeDecl::new(DeclKind::StaticClass, LAYER_INFOS);
    for (layer, ident) in metadata.layers.iter().zip(&layer_idents) {
        layers = layers.variant(ident, layer.index);
        layer_infos.push_member(
            FieldDecl::new(LAYER_INFO, ident)
                .modifiers("public static readonly")
                .init(format!(
                    "new {LAYER_INFO}({})",
                    to_verbatim_literal(&layer.name)
                )),
        );
    }
    layer_infos.push_member(
        FieldDecl::new(format!("{LAYER_INFO}[]"), "All")
            .modifiers("public static readonly")
            .elements(layer_idents.iter().cloned()),
    );

    let mut sorting_layers = EnumDecl::new("SortingLayers");
    for (layer, ident) in metadata.sorting_layers.iter().zip(&sorting_idents) {
        // host ids are signed; keep the bit pattern
        sorting_layers = sorting_layers.variant(ident, layer.id as i32);
    }

    let file = SourceFile::new().namespace(
        Namespace::new(namespace)
            .item(layer_info_decl())
            .item(composite_layer_decl())
            .item(tags)
            .item(tag_data)
            .item(layers)
            .item(layer_infos)
            .item(sorting_layers),
    );

    SourceUnit {
        hint: hint_name(namespace, "ProjectReflection"),
        namespace: namespace.to_string(),
        content: file.render(indent),
        category: FileCategory::Reflection,
    }
}

fn idents<'a>(mut scope: IdentifierSet, names: impl Iterator<Item = &'a String>) -> Vec<String> {
    names.map(|name| scope.insert(name)).collect()
}

/// A single layer resolved by name on first use.
fn layer_info_decl() -> TypeDecl {
    TypeDecl::new(DeclKind::ReadonlyStruct, LAYER_INFO)
        .member(FieldDecl::new("string", "Name").modifiers("public readonly"))
        .member(FieldDecl::new("int", "Index").modifiers("public readonly"))
        .member(FieldDecl::new("int", "Mask").modifiers("public readonly"))
        .member(
            MethodDecl::new(format!("public {LAYER_INFO}(string name)"))
                .line("this.Name = name;")
                .line(format!("this.Index = {LAYER_MASK}.NameToLayer(name);"))
                .line(format!("this.Mask = {LAYER_MASK}.GetMask(name);")),
        )
        .member(MethodDecl::new("public override string ToString()").line("return Name;"))
        .member(
            MethodDecl::new(format!(
                "public static implicit operator int({LAYER_INFO} layer)"
            ))
            .line("return layer.Index;"),
        )
}

/// A named mask combining several layers.
fn composite_layer_decl() -> TypeDecl {
    TypeDecl::new(DeclKind::ReadonlyStruct, "CompositeLayer")
        .member(FieldDecl::new("string", "Name").modifiers("public readonly"))
        .member(FieldDecl::new("int", "Mask").modifiers("public readonly"))
        .member(
            MethodDecl::new(format!(
                "public CompositeLayer(string name, params {LAYER_INFO}[] layers)"
            ))
            .line("this.Name = name;")
            .line("var mask = 0;")
            .block("foreach (var layer in layers)", ["mask |= layer.Mask;"])
            .line("this.Mask = mask;"),
        )
        .member(MethodDecl::new("public override string ToString()").line("return Name;"))
        .member(
            MethodDecl::new("public static implicit operator int(CompositeLayer layer)")
                .line("return layer.Mask;"),
        )
}
