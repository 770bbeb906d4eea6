// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

use extmodel_derive::ExtModel;

#[derive(ExtModel)]
#[model(
    name = "MyApp.model.Book",
    id_property = "isbn",
    version_property = "version",
    paging,
    disable_paging_parameters,
    read_method = "bookService.read",
    create_method = "bookService.create",
    update_method = "bookService.update",
    destroy_method = "bookService.destroy",
    root_property = "rows",
    success_property = "ok",
    writer = "deep",
    write_all_fields = false,
    all_data_options(associated = true),
    partial_data_options(persist = true)
)]
pub struct Book {
    #[model_field(unique, allow_blank = false)]
    pub isbn: String,

    #[model_field(default_value = "untitled")]
    pub title: String,

    #[model_field(type = "date", date_format = "c")]
    pub published: String,

    #[model_field(persist = false, mapping = "meta.rating")]
    pub rating: f64,

    #[model_field(skip)]
    pub internal: String,
}

fn main() {
    let generated = Book::model_config().assemble();
    assert!(generated.is_clean());

    let doc = &generated.document;
    assert_eq!(doc["name"], "MyApp.model.Book");
    assert_eq!(doc["idProperty"], "isbn");
    assert_eq!(doc["versionProperty"], "version");
    assert_eq!(doc["fields"].as_array().map(Vec::len), Some(4));
    assert_eq!(doc["proxy"]["idParam"], "isbn");
    assert_eq!(doc["proxy"]["reader"]["rootProperty"], "rows");
}
