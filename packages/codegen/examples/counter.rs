use trigger_codegen::{
    check_registry, generate_unit, Attribute, AttributeType, CheckOptions, Entity,
    GenerateOptions, Registry, UnitName,
};

fn main() {
    let mut registry = Registry::new();
    registry.register(
        Entity::new("Counter")
            .attribute(Attribute::new("count", AttributeType::Integer))
            .attribute(Attribute::new("label", AttributeType::Text).with_default("n/a")),
    );
    registry.register(
        Entity::new("Settings")
            .attribute(Attribute::new("darkMode", AttributeType::Boolean).with_default("False"))
            .attribute(Attribute::new("scale", AttributeType::Float).with_default("1.0"))
            .attribute(Attribute::new(
                "accent",
                AttributeType::Other("Color?".to_string()),
            )),
    );

    for diagnostic in check_registry(&registry, CheckOptions::default()) {
        println!("{:?}: {}", diagnostic.level, diagnostic.message);
    }

    println!("Generating counter.g.dart...\n");

    let unit = UnitName::new("counter");
    let output = generate_unit(&registry, &unit, &GenerateOptions::default());
    println!("{}", output);
}
