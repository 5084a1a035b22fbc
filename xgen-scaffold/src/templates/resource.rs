use super::{Step, TemplateSpec};

macro_rules! template {
    ($id:literal, $path:literal, $tpl:literal) => {
        Step::File(TemplateSpec {
            id: $id,
            path: $path,
            body: include_str!(concat!("../../templates/resource/", $tpl)),
        })
    };
}

/// The REST, business and model files of one resource.
///
/// Paths use `{{.package_name}}` for the package directory and
/// `{{.resource_file}}` for the lower-case resource file stem.
pub static RESOURCE: &[Step] = &[
    Step::Dir("rest/{{.package_name}}"),
    template!("rest", "rest/{{.package_name}}/{{.resource_file}}.go", "rest.go.tpl"),
    Step::Dir("business/{{.package_name}}"),
    template!(
        "business_entity",
        "business/{{.package_name}}/{{.resource_file}}.go",
        "business_entity.go.tpl"
    ),
    template!(
        "business_repository",
        "business/{{.package_name}}/{{.resource_file}}_repository.go",
        "business_repository.go.tpl"
    ),
    template!(
        "business_encode",
        "business/{{.package_name}}/encode_{{.resource_file}}.go",
        "business_encode.go.tpl"
    ),
    Step::Dir("model/{{.package_name}}"),
    template!("model", "model/{{.package_name}}/{{.resource_file}}.go", "model.go.tpl"),
];
