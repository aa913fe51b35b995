use crate::dart::{Body, ClassDecl, Declaration, Member};
use crate::descriptor::Entity;
use crate::options::GenerateOptions;
use crate::output::UnitName;
use crate::printer::print_declarations;
use crate::registry::Registry;
use crate::types::ResolvedAttribute;
use tracing::debug;

pub(crate) const GENERATED_MARKER: &str = "GENERATED CODE - DO NOT MODIFY BY HAND";

/// Generate the complete `.g.dart` unit for a registry
pub fn generate_unit(registry: &Registry, unit: &UnitName, options: &GenerateOptions) -> String {
    print_declarations(&compile_unit(registry, unit, options))
}

/// Generate the classes for a single entity
pub fn generate_entity(entity: &Entity, options: &GenerateOptions) -> String {
    print_declarations(&compile_entity(entity, options))
}

/// Build the declaration list for a whole unit, entities in registry order
pub fn compile_unit(
    registry: &Registry,
    unit: &UnitName,
    options: &GenerateOptions,
) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    if options.variant.has_header() {
        declarations.push(Declaration::Comment(GENERATED_MARKER.to_string()));
    }
    declarations.push(Declaration::PartOf(unit.library_file(&options.extension)));

    for entity in registry.entities() {
        declarations.extend(compile_entity(entity, options));
    }

    declarations
}

/// Build the value holder, field selector and (extended) batch setter for an entity
pub fn compile_entity(entity: &Entity, options: &GenerateOptions) -> Vec<Declaration> {
    debug!(
        entity = %entity.name,
        attributes = entity.attributes.len(),
        variant = %options.variant,
        "Compiling entity"
    );

    let attributes: Vec<ResolvedAttribute> = entity
        .attributes
        .iter()
        .map(|a| ResolvedAttribute::resolve(a, options.variant))
        .collect();

    let mut declarations = vec![
        Declaration::Class(compile_holder(&entity.name, &attributes, options)),
        Declaration::Class(compile_field_selector(&entity.name, &attributes)),
    ];

    if options.variant.has_batch_setter() {
        declarations.push(Declaration::Class(compile_multi_setter(
            &entity.name,
            &attributes,
        )));
    }

    declarations
}

fn compile_holder(
    name: &str,
    attributes: &[ResolvedAttribute],
    options: &GenerateOptions,
) -> ClassDecl {
    let initializer: Vec<String> = attributes
        .iter()
        .map(|a| format!("{} = {};", a.name, a.default_literal))
        .collect();

    let class = if options.variant.has_batch_setter() {
        ClassDecl::new(name)
            .with_modifier("base")
            .extends("Trigger")
            .member(Member::Field {
                modifiers: Some("static final".to_string()),
                ty: Some(name.to_string()),
                name: "_instance".to_string(),
                init: Some(format!("{}._internal()", name)),
            })
            .member(Member::Method {
                modifiers: Some("static".to_string()),
                return_ty: format!("{}Field", name),
                name: "fields".to_string(),
                params: String::new(),
                body: Body::Arrow(format!("{}Field()", name)),
            })
            .member(Member::Constructor {
                name: format!("{}._internal", name),
                body: Body::Block(initializer),
            })
            .member(Member::Comment(format!(
                "this will be used to spawn a new {} instance that is not singleton.",
                name
            )))
            .member(Member::Factory {
                name: format!("{}.spawn", name),
                body: Body::Block(vec![format!("return {}._internal();", name)]),
            })
            .member(Member::Factory {
                name: name.to_string(),
                body: Body::Block(vec![format!("return {}._instance;", name)]),
            })
    } else {
        ClassDecl::new(name)
            .extends("Trigger")
            .member(Member::Field {
                modifiers: Some("static".to_string()),
                ty: Some(format!("{}?", name)),
                name: "_instance".to_string(),
                init: None,
            })
            .member(Member::Constructor {
                name: format!("{}._create", name),
                body: Body::Block(initializer),
            })
            .member(Member::Factory {
                name: name.to_string(),
                body: Body::Block(vec![format!(
                    "return _instance ??= {}._create();",
                    name
                )]),
            })
    };

    let class = class.members(attributes.iter().flat_map(|a| {
        [
            Member::Getter {
                ty: a.type_token.clone(),
                name: a.name.clone(),
                body: Body::Arrow(a.read_expression()),
            },
            Member::Setter {
                name: a.name.clone(),
                ty: a.type_token.clone(),
                param: "val".to_string(),
                body: Body::Arrow(format!("setValue('{}', val)", a.name)),
            },
        ]
    }));

    if options.variant.has_batch_setter() {
        let setter = multi_setter_name(name);
        class.member(Member::Method {
            modifiers: None,
            return_ty: "void".to_string(),
            name: "multiSet".to_string(),
            params: format!("void Function({} setter) func", setter),
            body: Body::Block(vec![
                format!("final setter = {}();", setter),
                "func(setter);".to_string(),
                "setMultiValues(setter._map);".to_string(),
            ]),
        })
    } else {
        class
    }
}

fn compile_field_selector(name: &str, attributes: &[ResolvedAttribute]) -> ClassDecl {
    let selector = format!("{}Field", name);

    ClassDecl::new(&selector)
        .extends("TriggerField")
        .members(attributes.iter().map(|a| Member::Getter {
            ty: selector.clone(),
            name: a.name.clone(),
            body: Body::Block(vec![
                format!("addField('{}');", a.name),
                "return this;".to_string(),
            ]),
        }))
}

fn compile_multi_setter(name: &str, attributes: &[ResolvedAttribute]) -> ClassDecl {
    ClassDecl::new(multi_setter_name(name))
        .member(Member::Field {
            modifiers: Some("final".to_string()),
            ty: None,
            name: "_map".to_string(),
            init: Some("<String, dynamic>{}".to_string()),
        })
        .members(attributes.iter().map(|a| Member::Setter {
            name: a.name.clone(),
            ty: a.type_token.clone(),
            param: "val".to_string(),
            body: Body::Arrow(format!("_map[\"{}\"] = val", a.name)),
        }))
}

fn multi_setter_name(name: &str) -> String {
    format!("_{}MultiSetter", name)
}
