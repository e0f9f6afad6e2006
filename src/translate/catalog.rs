//! Built-in message catalogs.
//!
//! Both catalogs cover every built-in rule code. The `typeof` code is
//! rendered by a translator that names the expected kind.

use crate::codes;
use crate::translate::{substitute, Registry};
use crate::types::Params;
use crate::value::Kind;

const ENGLISH: &[(&str, &str)] = &[
    (codes::REQUIRED, "{label} is required"),
    (codes::REQUIRED_IF, "{label} is required"),
    (codes::REQUIRED_WITH, "{label} is required"),
    (codes::IS_STRING, "{label} must be a string"),
    (codes::IS_BOOL, "{label} must be a boolean"),
    (codes::IS_NUMBER, "{label} must be a number"),
    (codes::IS_NUMERIC, "{label} must be a numeric value"),
    (codes::NOT_EMPTY, "{label} must not be empty"),
    (codes::LENGTH, "{label} must have a length of {length}"),
    (codes::MIN_LENGTH, "{label} must have a length of at least {min}"),
    (codes::MAX_LENGTH, "{label} must have a length of at most {max}"),
    (codes::LENGTH_BETWEEN, "{label} must have a length between {min} and {max}"),
    (codes::GREATER_THAN, "{label} must be greater than {min}"),
    (codes::GREATER_EQUAL_THAN, "{label} must be greater than or equal to {min}"),
    (codes::LESS_THAN, "{label} must be less than {max}"),
    (codes::LESS_EQUAL_THAN, "{label} must be less than or equal to {max}"),
    (codes::BETWEEN, "{label} must be between {min} and {max}"),
    (codes::NOT_BETWEEN, "{label} must be less than {min} or greater than {max}"),
    (codes::EQUAL, "{label} must be equal to {another}"),
    (codes::NOT_EQUAL, "{label} must not be equal to {another}"),
    (codes::ONE_OF, "{label} must be one of {items}"),
    (codes::CONTAINS, "{label} must contain '{substr}'"),
    (codes::CONTAINS_ANY, "{label} must contain at least one of '{chars}'"),
    (codes::CONTAINS_CHAR, "{label} must contain '{char}'"),
    (codes::EXCLUDES, "{label} must not contain '{substr}'"),
    (codes::EXCLUDES_ALL, "{label} must not contain any of '{chars}'"),
    (codes::EXCLUDES_CHAR, "{label} must not contain '{char}'"),
    (codes::STARTS_WITH, "{label} must start with '{prefix}'"),
    (codes::STARTS_NOT_WITH, "{label} must not start with '{prefix}'"),
    (codes::ENDS_WITH, "{label} must end with '{suffix}'"),
    (codes::ENDS_NOT_WITH, "{label} must not end with '{suffix}'"),
    (codes::IS_LOWER, "{label} must be lowercase"),
    (codes::IS_UPPER, "{label} must be uppercase"),
    (codes::IS_ASCII, "{label} must contain only ASCII characters"),
    (codes::IS_ALPHA, "{label} must contain only letters"),
    (codes::IS_ALPHANUMERIC, "{label} must contain only letters and digits"),
    (codes::EVERY, "every item of {label} must be valid"),
    (codes::SOME, "at least one item of {label} must be valid"),
    (codes::ANY_OF, "at least one of the following must pass:"),
    (codes::INDEX_BY, "parameters are incomplete"),
];

const CHINESE: &[(&str, &str)] = &[
    (codes::REQUIRED, "{label}为必填字段"),
    (codes::REQUIRED_IF, "{label}为必填字段"),
    (codes::REQUIRED_WITH, "{label}为必填字段"),
    (codes::IS_STRING, "{label}必须是一个字符串"),
    (codes::IS_BOOL, "{label}必须是一个有效的布尔值"),
    (codes::IS_NUMBER, "{label}必须是一个有效的数字"),
    (codes::IS_NUMERIC, "{label}必须是一个有效的数值"),
    (codes::NOT_EMPTY, "{label}不能为空"),
    (codes::LENGTH, "{label}长度必须是{length}"),
    (codes::MIN_LENGTH, "{label}最小长度为{min}"),
    (codes::MAX_LENGTH, "{label}最大长度为{max}"),
    (codes::LENGTH_BETWEEN, "{label}长度必须大于或等于{min}且小于或等于{max}"),
    (codes::GREATER_THAN, "{label}必须大于{min}"),
    (codes::GREATER_EQUAL_THAN, "{label}必须大于或等于{min}"),
    (codes::LESS_THAN, "{label}必须小于{max}"),
    (codes::LESS_EQUAL_THAN, "{label}必须小于或等于{max}"),
    (codes::BETWEEN, "{label}必须大于或等于{min}且小于或等于{max}"),
    (codes::NOT_BETWEEN, "{label}必须小于{min}或大于{max}"),
    (codes::EQUAL, "{label}必须等于{another}"),
    (codes::NOT_EQUAL, "{label}不能等于{another}"),
    (codes::ONE_OF, "{label}必须是{items}中的一个"),
    (codes::CONTAINS, "{label}必须包含文本'{substr}'"),
    (codes::CONTAINS_ANY, "{label}必须包含至少一个以下字符'{chars}'"),
    (codes::CONTAINS_CHAR, "{label}必须包含字符'{char}'"),
    (codes::EXCLUDES, "{label}不能包含文本'{substr}'"),
    (codes::EXCLUDES_ALL, "{label}不能包含以下任何字符'{chars}'"),
    (codes::EXCLUDES_CHAR, "{label}不能包含'{char}'"),
    (codes::STARTS_WITH, "{label}必须以文本'{prefix}'开头"),
    (codes::STARTS_NOT_WITH, "{label}不能以文本'{prefix}'开头"),
    (codes::ENDS_WITH, "{label}必须以文本'{suffix}'结尾"),
    (codes::ENDS_NOT_WITH, "{label}不能以文本'{suffix}'结尾"),
    (codes::IS_LOWER, "{label}必须是小写字母"),
    (codes::IS_UPPER, "{label}必须是大写字母"),
    (codes::IS_ASCII, "{label}只能包含ASCII字符"),
    (codes::IS_ALPHA, "{label}只能包含字母"),
    (codes::IS_ALPHANUMERIC, "{label}只能包含字母和数字"),
    (codes::EVERY, "{label}的所有子项必须通过验证"),
    (codes::SOME, "{label}至少有一个子项通过验证"),
    (codes::ANY_OF, "以下错误至少满足一项："),
    (codes::INDEX_BY, "参数不完整"),
];

/// Loads the English templates and the `typeof` translator.
pub fn load_english(registry: &mut Registry) {
    for (code, template) in ENGLISH {
        registry.register(*code, *template);
    }
    registry.register_translator(codes::TYPEOF, |template, params| {
        let fallback = "{label} has an invalid type";
        typeof_message(template, params, english_kind, "{label} must be {kind}", fallback)
    });
}

/// Loads the Simplified Chinese templates and the `typeof` translator.
pub fn load_chinese(registry: &mut Registry) {
    for (code, template) in CHINESE {
        registry.register(*code, *template);
    }
    registry.register_translator(codes::TYPEOF, |template, params| {
        typeof_message(template, params, chinese_kind, "{label}不是有效的{kind}", "{label}格式验证失败")
    });
}

fn typeof_message(
    template: &str,
    params: &Params,
    noun: fn(Kind) -> Option<&'static str>,
    known: &str,
    unknown: &str,
) -> String {
    if !template.is_empty() {
        return substitute(template, params);
    }
    let kind = params
        .get("kind")
        .and_then(|k| k.as_str())
        .and_then(Kind::parse)
        .and_then(noun);
    match kind {
        Some(noun) => {
            let mut params = params.clone();
            params.insert("kind", noun);
            substitute(known, &params)
        }
        None => substitute(unknown, params),
    }
}

fn english_kind(kind: Kind) -> Option<&'static str> {
    let noun = match kind {
        Kind::Bool => "a boolean",
        Kind::Int => "an integer",
        Kind::Uint => "an unsigned integer",
        Kind::Float => "a float",
        Kind::String => "a string",
        Kind::Seq => "a sequence",
        Kind::Map => "a map",
        Kind::Record => "a record",
        Kind::Null | Kind::Optional => return None,
    };
    Some(noun)
}

fn chinese_kind(kind: Kind) -> Option<&'static str> {
    let noun = match kind {
        Kind::Bool => "布尔值",
        Kind::Int => "整数",
        Kind::Uint => "正整数",
        Kind::Float => "浮点数",
        Kind::String => "字符串",
        Kind::Seq => "切片(Slice)",
        Kind::Map => "字典(Mapper)",
        Kind::Record => "结构体",
        Kind::Null | Kind::Optional => return None,
    };
    Some(noun)
}
