use super::{Step, TemplateSpec};

macro_rules! template {
    ($id:literal, $path:literal, $tpl:literal) => {
        Step::File(TemplateSpec {
            id: $id,
            path: $path,
            body: include_str!(concat!("../../templates/application/", $tpl)),
        })
    };
}

/// A complete API application with an example `account/user` resource.
pub static APPLICATION: &[Step] = &[
    Step::Dir(""),
    Step::Dir("conf"),
    Step::Dir("rest"),
    Step::Dir("model"),
    Step::Dir("business"),
    template!("app_conf", "conf/app.conf", "app.conf.tpl"),
    // rest
    Step::Dir("rest/account"),
    template!("rest_user", "rest/account/user.go", "rest_user.go.tpl"),
    template!("rest_login_user", "rest/account/login_user.go", "rest_login_user.go.tpl"),
    template!("rest_init", "rest/init.go", "rest_init.go.tpl"),
    // business
    Step::Dir("business/account"),
    template!("business_user", "business/account/user.go", "business_user.go.tpl"),
    template!(
        "business_user_repository",
        "business/account/user_repository.go",
        "business_user_repository.go.tpl"
    ),
    template!(
        "business_encode_user",
        "business/account/encode_user.go",
        "business_encode_user.go.tpl"
    ),
    template!(
        "business_auth_user_service",
        "business/account/auth_user_service.go",
        "business_auth_user_service.go.tpl"
    ),
    template!("business_init", "business/init.go", "business_init.go.tpl"),
    // model
    Step::Dir("model/account"),
    template!("model_user", "model/account/user.go", "model_user.go.tpl"),
    template!("model_init", "model/init.go", "model_init.go.tpl"),
    template!("main", "main.go", "main.go.tpl"),
    template!("gitignore", ".gitignore", "gitignore.tpl"),
];
