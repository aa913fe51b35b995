use crate::context::CodeWriter;
use crate::dart::{Body, ClassDecl, Declaration, Member};

/// Render declarations as Dart source.
///
/// Declarations are separated by one blank line and the output ends with a
/// single newline.
pub fn print_declarations(declarations: &[Declaration]) -> String {
    let mut writer = CodeWriter::new();

    for (i, declaration) in declarations.iter().enumerate() {
        if i > 0 {
            writer.blank_line();
        }
        print_declaration(declaration, &mut writer);
    }

    writer.into_output()
}

fn print_declaration(declaration: &Declaration, writer: &mut CodeWriter) {
    match declaration {
        Declaration::Comment(text) => writer.add_line(&format!("// {}", text)),
        Declaration::PartOf(library) => writer.add_line(&format!("part of '{}';", library)),
        Declaration::Class(class) => print_class(class, writer),
    }
}

fn print_class(class: &ClassDecl, writer: &mut CodeWriter) {
    let mut header = String::new();
    if let Some(modifier) = &class.modifier {
        header.push_str(modifier);
        header.push(' ');
    }
    header.push_str("class ");
    header.push_str(&class.name);
    if let Some(superclass) = &class.extends {
        header.push_str(" extends ");
        header.push_str(superclass);
    }

    if class.members.is_empty() {
        writer.add_line(&format!("{} {{}}", header));
        return;
    }

    writer.add_line(&format!("{} {{", header));
    writer.indent();

    let mut previous: Option<&Member> = None;
    for member in &class.members {
        if let Some(prev) = previous {
            if needs_separator(prev, member) {
                writer.blank_line();
            }
        }
        print_member(member, writer);
        previous = Some(member);
    }

    writer.dedent();
    writer.add_line("}");
}

/// Compact members stay together; anything else gets a blank line around it.
/// A comment sticks to the member that follows it.
fn needs_separator(previous: &Member, next: &Member) -> bool {
    if matches!(previous, Member::Comment(_)) {
        return false;
    }
    if matches!(next, Member::Comment(_)) {
        return true;
    }
    if std::mem::discriminant(previous) != std::mem::discriminant(next)
        && !(is_accessor(previous) && is_accessor(next))
    {
        return true;
    }
    !(previous.is_compact() && next.is_compact())
}

fn is_accessor(member: &Member) -> bool {
    matches!(member, Member::Getter { .. } | Member::Setter { .. })
}

fn print_member(member: &Member, writer: &mut CodeWriter) {
    match member {
        Member::Comment(text) => writer.add_line(&format!("// {}", text)),
        Member::Field {
            modifiers,
            ty,
            name,
            init,
        } => {
            let mut line = String::new();
            for part in [modifiers, ty].into_iter().flatten() {
                line.push_str(part);
                line.push(' ');
            }
            line.push_str(name);
            if let Some(init) = init {
                line.push_str(" = ");
                line.push_str(init);
            }
            line.push(';');
            writer.add_line(&line);
        }
        Member::Constructor { name, body } => {
            print_function(&format!("{}()", name), body, writer);
        }
        Member::Factory { name, body } => {
            print_function(&format!("factory {}()", name), body, writer);
        }
        Member::Getter { ty, name, body } => {
            print_function(&format!("{} get {}", ty, name), body, writer);
        }
        Member::Setter {
            name,
            ty,
            param,
            body,
        } => {
            print_function(&format!("set {}({} {})", name, ty, param), body, writer);
        }
        Member::Method {
            modifiers,
            return_ty,
            name,
            params,
            body,
        } => {
            let prefix = modifiers
                .as_ref()
                .map(|m| format!("{} ", m))
                .unwrap_or_default();
            print_function(
                &format!("{}{} {}({})", prefix, return_ty, name, params),
                body,
                writer,
            );
        }
    }
}

fn print_function(signature: &str, body: &Body, writer: &mut CodeWriter) {
    match body {
        Body::Arrow(expression) => {
            writer.add_line(&format!("{} => {};", signature, expression));
        }
        Body::Block(statements) if statements.is_empty() => {
            writer.add_line(&format!("{} {{}}", signature));
        }
        Body::Block(statements) => {
            writer.add_line(&format!("{} {{", signature));
            writer.indent();
            for statement in statements {
                writer.add_line(statement);
            }
            writer.dedent();
            writer.add_line("}");
        }
    }
}
