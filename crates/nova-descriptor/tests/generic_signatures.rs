use std::io;
use std::sync::{Arc, Mutex};

use nova_descriptor::{
    bounds, generic_name, infer_method_descriptor, type_parameters_signature, Bound, CodeType,
    DescriptorConfig, Error, GenericResolver, GenericSignature, GenericType, MethodDeclaration,
    Parameter, PrimitiveType, TypeDeclaration, TypeParameter, TypeSpec,
};
use tracing_subscriber::fmt::MakeWriter;

use pretty_assertions::assert_eq;

fn class(name: &str) -> CodeType {
    CodeType::class(name)
}

fn var(name: &str) -> CodeType {
    GenericType::var(name).into()
}

fn scope(params: &[(&str, Vec<CodeType>)]) -> GenericSignature {
    GenericSignature::new(
        params
            .iter()
            .map(|(name, bounds)| TypeParameter::new(*name, bounds.clone()))
            .collect(),
    )
}

#[test]
fn non_generic_types_render_as_descriptors() {
    assert_eq!(generic_name(&class("java.lang.String")), "Ljava/lang/String;");
    assert_eq!(generic_name(&CodeType::Primitive(PrimitiveType::Int)), "I");
    assert_eq!(
        generic_name(&CodeType::array(class("java.lang.Object"))),
        "[Ljava/lang/Object;"
    );
}

#[test]
fn unbounded_shapes() {
    assert_eq!(generic_name(&var("T")), "TT;");
    assert_eq!(generic_name(&var("Key")), "TKey;");
    assert_eq!(generic_name(&GenericType::wildcard().into()), "*");

    let resolved = GenericType {
        is_type: true,
        ..GenericType::var("Ljava/lang/String")
    };
    assert_eq!(generic_name(&resolved.into()), "Ljava/lang/String;");
}

#[test]
fn bounded_wildcards() {
    let extends = GenericType::wildcard_bounded(Bound::extends(class("java.lang.Number")));
    assert_eq!(generic_name(&extends.into()), "+Ljava/lang/Number;");

    let super_ = GenericType::wildcard_bounded(Bound::super_(class("java.lang.Integer")));
    assert_eq!(generic_name(&super_.into()), "-Ljava/lang/Integer;");
}

#[test]
fn bounded_named_types() {
    let list = GenericType::parameterized("java.util.List", vec![Bound::exact(var("E"))]);
    assert_eq!(generic_name(&list.into()), "Ljava/util/List<TE;>;");

    let map = GenericType::parameterized(
        "java.util.Map",
        vec![Bound::exact(var("K")), Bound::extends(var("V"))],
    );
    assert_eq!(generic_name(&map.into()), "Ljava/util/Map<TK;+TV;>;");

    let bounded_var =
        GenericType::var("T").with_bounds(vec![Bound::exact(class("java.lang.Number"))]);
    assert_eq!(generic_name(&bounded_var.into()), "T<Ljava/lang/Number;>;");
}

#[test]
fn nested_wildcard_has_no_doubled_terminator() {
    let number = GenericType::wildcard_bounded(Bound::extends(class("java.lang.Number")));
    let list = GenericType::parameterized("java.util.List", vec![Bound::exact(number.into())]);
    assert_eq!(generic_name(&list.into()), "Ljava/util/List<+Ljava/lang/Number;>;");
}

#[test]
fn bounds_render_with_signs() {
    assert_eq!(
        bounds(&[
            Bound::exact(class("java.lang.String")),
            Bound::super_(var("T")),
            Bound::exact(GenericType::wildcard().into()),
        ]),
        "Ljava/lang/String;-TT;*"
    );
}

#[test]
fn formal_type_parameter_sections() {
    assert_eq!(type_parameters_signature(&GenericSignature::empty()), "");

    let sig = scope(&[("T", vec![class("java.lang.Number")]), ("U", vec![])]);
    assert_eq!(
        type_parameters_signature(&sig),
        "<T:Ljava/lang/Number;U:Ljava/lang/Object;>"
    );

    let comparable =
        GenericType::parameterized("java.lang.Comparable", vec![Bound::exact(var("T"))]);
    let sig = scope(&[("T", vec![class("java.lang.Object"), comparable.into()])]);
    assert_eq!(
        type_parameters_signature(&sig),
        "<T:Ljava/lang/Object;:Ljava/lang/Comparable<TT;>;>"
    );

    let comparable =
        GenericType::parameterized("java.lang.Comparable", vec![Bound::exact(var("V"))]);
    let sig = GenericSignature::new(vec![
        TypeParameter::new("K", vec![]),
        TypeParameter::interface_bounded("V", vec![comparable.into()]),
    ]);
    assert_eq!(
        type_parameters_signature(&sig),
        "<K:Ljava/lang/Object;V::Ljava/lang/Comparable<TV;>;>"
    );
}

#[test]
fn wildcard_named_in_scope_is_substituted() {
    let owner = TypeDeclaration::new(
        "com.example.Box",
        scope(&[("T", vec![class("java.lang.Number")])]),
    );
    let method = GenericSignature::empty();
    let wildcard: CodeType = GenericType {
        name: "T".to_string(),
        ..GenericType::wildcard()
    }
    .into();

    let params = [Parameter::new("value", wildcard.clone())];

    let desc = infer_method_descriptor(&owner, &method, &params, &wildcard).unwrap();
    assert_eq!(desc, "(Ljava/lang/Number;)Ljava/lang/Number;");

    // Undeclared wildcards follow the same unresolved-generic policy as variables.
    let strict =
        GenericResolver::for_method(&owner, &method).with_config(DescriptorConfig::strict());
    assert_eq!(
        strict.resolve(&GenericType::wildcard().into()),
        Err(Error::MissingGenericBound {
            name: "*".to_string()
        })
    );
}

#[test]
fn method_scope_shadows_owner_scope() {
    let owner = TypeDeclaration::new(
        "com.example.Box",
        scope(&[("T", vec![class("java.lang.CharSequence")])]),
    );
    let method = MethodDeclaration::new(
        "foo",
        scope(&[("T", vec![class("java.lang.Number")])]),
        vec![Parameter::new("value", var("T"))],
        var("T"),
    );

    let desc =
        infer_method_descriptor(&owner, &method, &method.parameters, &method.return_type).unwrap();
    assert_eq!(desc, "(Ljava/lang/Number;)Ljava/lang/Number;");
}

#[test]
fn owner_scope_used_when_method_does_not_declare() {
    let owner = TypeDeclaration::new(
        "com.example.Box",
        scope(&[("E", vec![class("java.lang.CharSequence")])]),
    );
    let method = MethodDeclaration::new(
        "get",
        GenericSignature::empty(),
        vec![Parameter::new("index", CodeType::Primitive(PrimitiveType::Int))],
        var("E"),
    );

    let desc =
        infer_method_descriptor(&owner, &method, &method.parameters, &method.return_type).unwrap();
    assert_eq!(desc, "(I)Ljava/lang/CharSequence;");
}

#[test]
fn unbound_variable_falls_back_to_erasure_in_every_position() {
    let owner = TypeDeclaration::new("com.example.Box", GenericSignature::empty());
    let method = MethodDeclaration::new(
        "foo",
        GenericSignature::empty(),
        vec![Parameter::new(
            "value",
            GenericType::var("T").with_erasure(class("java.lang.Comparable")).into(),
        )],
        GenericType::var("T").with_erasure(class("java.lang.Comparable")).into(),
    );

    let desc =
        infer_method_descriptor(&owner, &method, &method.parameters, &method.return_type).unwrap();
    assert_eq!(desc, "(Ljava/lang/Comparable;)Ljava/lang/Comparable;");

    let default_erasure = infer_method_descriptor(
        &owner,
        &method,
        &[Parameter::new("value", var("T"))],
        &var("T"),
    )
    .unwrap();
    assert_eq!(default_erasure, "(Ljava/lang/Object;)Ljava/lang/Object;");
}

#[test]
fn declared_without_bounds_resolves_to_object() {
    let owner = TypeDeclaration::new(
        "com.example.Box",
        scope(&[("T", vec![class("java.lang.Number")])]),
    );
    let method_scope = scope(&[("T", vec![])]);

    let resolver = GenericResolver::for_method(&owner, &method_scope);
    assert_eq!(resolver.resolve(&var("T")).unwrap(), CodeType::object());
}

#[test]
fn resolved_types_and_arrays() {
    let owner = TypeDeclaration::new(
        "com.example.Box",
        scope(&[("T", vec![class("java.lang.Number")])]),
    );
    let method = GenericSignature::empty();
    let resolver = GenericResolver::for_method(&owner, &method);

    // Already a concrete substitution: no lookup even though `T` is declared.
    let concrete = GenericType {
        is_type: true,
        ..GenericType::var("T").with_erasure(class("java.lang.String"))
    };
    let spec = TypeSpec::new(
        concrete.into(),
        vec![CodeType::array_of(var("T"), 2), CodeType::Primitive(PrimitiveType::Long)],
    );
    assert_eq!(
        resolver.infer_type_spec(&spec).unwrap(),
        "([[Ljava/lang/Number;J)Ljava/lang/String;"
    );
}

#[test]
fn strict_policy_reports_missing_bound() {
    let owner = TypeDeclaration::new(
        "com.example.Box",
        scope(&[("E", vec![class("java.lang.CharSequence")])]),
    );
    let method = GenericSignature::empty();
    let resolver =
        GenericResolver::for_method(&owner, &method).with_config(DescriptorConfig::strict());
    let params = [Parameter::new("e", var("E"))];

    assert_eq!(
        resolver.infer_descriptor(&params, &var("R")),
        Err(Error::MissingGenericBound {
            name: "R".to_string()
        })
    );
    assert_eq!(
        resolver
            .infer_descriptor(&params, &CodeType::Primitive(PrimitiveType::Void))
            .unwrap(),
        "(Ljava/lang/CharSequence;)V"
    );
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn erasure_fallback_is_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let owner = GenericSignature::empty();
    let method = GenericSignature::empty();
    tracing::subscriber::with_default(subscriber, || {
        let desc = infer_method_descriptor(&owner, &method, &[], &var("Missing")).unwrap();
        assert_eq!(desc, "()Ljava/lang/Object;");
    });

    let text = logs.text();
    assert!(text.contains("using its erasure"), "{text}");
    assert!(text.contains("Missing"), "{text}");
}
