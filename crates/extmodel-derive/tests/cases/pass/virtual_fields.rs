// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

use extmodel_derive::ExtModel;

#[derive(ExtModel)]
#[model_field(
    name = "fullName",
    type = "string",
    depends(first_name, last_name),
    calculate = "function(data) { return data.first_name + ' ' + data.last_name; }"
)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

fn main() {
    let generated = Person::model_config().assemble();
    assert!(generated.is_clean());

    let fields = generated.document["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[3]["name"], "fullName");
    assert_eq!(fields[3]["depends"][0], "first_name");
}
