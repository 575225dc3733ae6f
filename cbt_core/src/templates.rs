//! Bundling of HTML template files into a single ES module.
//!
//! Templates are treated as opaque text. The only syntax recognised is the
//! `<% ... %>` directive block, which may contain `import` statements that
//! are hoisted to the top of the generated module:
//!
//! ```html
//! <% import icons from './icons.mjs'; %>
//! <button>${lang.BUTTON_OK}</button>
//! ```

use std::collections::HashMap;

use crate::CbtError;
use crate::CbtResult;
use crate::locales::GENERATED_HEADER;

/// Module emitted when no template files exist and a file is required
/// anyway.
pub const EMPTY_TEMPLATES_MODULE: &str = "export default {dom:()=>null,str:()=>''};";

/// A template file ready to be bundled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
	/// Identifier the template is looked up by: the file name without its
	/// extension.
	pub key: String,
	/// Project-relative path, used in the module's comments.
	pub origin: String,
	/// Template body with directive blocks removed and backticks escaped.
	pub body: String,
	/// `import` statements found in the template's directive blocks.
	pub imports: Vec<String>,
}

impl CompiledTemplate {
	/// Prepare the raw `content` of the template at `origin`.
	pub fn compile(origin: &str, content: &str, min_whitespace: bool) -> CbtResult<Self> {
		let key = template_key(origin)?;
		let (body, imports) = extract_imports(origin, content)?;
		let body = if min_whitespace {
			collapse_whitespace(&strip_comments(&body))
		} else {
			body
		};
		let body = escape_backticks(&body);

		Ok(Self {
			key,
			origin: origin.to_string(),
			body,
			imports,
		})
	}
}

/// Derive the template key from its path and check that it is a valid
/// identifier: `$`, `_` and ASCII alphanumerics only.
pub fn template_key(origin: &str) -> CbtResult<String> {
	let file_name = origin.rsplit(['/', '\\']).next().unwrap_or(origin);
	let key = match file_name.rsplit_once('.') {
		Some((stem, _)) if !stem.is_empty() => stem,
		_ => file_name,
	};

	if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$')) {
		return Err(CbtError::InvalidTemplateName {
			path: origin.to_string(),
		});
	}

	Ok(key.to_string())
}

/// Remove every `<% ... %>` block from `content` and collect the `import`
/// statements inside them.
///
/// Statements are separated by `;` or line breaks. Each one is terminated
/// with `;` and listed once. Anything other than an `import` is rejected.
/// The remaining body is trimmed.
pub fn extract_imports(origin: &str, content: &str) -> CbtResult<(String, Vec<String>)> {
	let mut body = content.trim().to_string();
	let mut imports: Vec<String> = Vec::new();

	while let Some(block) = find_directive_block(&body) {
		let inner = &body[block.start + 2..block.end - 2];

		for line in inner.trim().split([';', '\r', '\n']) {
			let line = line.trim();
			if line.is_empty() {
				continue;
			}
			if !line.starts_with("import ") {
				return Err(CbtError::InvalidImportDirective {
					path: origin.to_string(),
					line: line.to_string(),
				});
			}

			let statement = format!("{line};");
			if !imports.contains(&statement) {
				imports.push(statement);
			}
		}

		body.replace_range(block, "");
		body = body.trim().to_string();
	}

	Ok((body, imports))
}

/// Byte range of the first `<%...%>` block. The block must contain at least
/// one character and no `%`.
fn find_directive_block(content: &str) -> Option<std::ops::Range<usize>> {
	for (start, _) in content.match_indices("<%") {
		let inner_start = start + 2;
		let Some(percent) = content[inner_start..].find('%') else {
			return None;
		};
		let inner_end = inner_start + percent;

		if inner_end > inner_start && content[inner_end..].starts_with("%>") {
			return Some(start..inner_end + 2);
		}
	}

	None
}

/// Collapse every run of whitespace into a single space.
pub fn collapse_whitespace(content: &str) -> String {
	content.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove `<!-- ... -->` comments. Conditional comments (`<!--[if ...]>`)
/// and unterminated comments are kept.
pub fn strip_comments(content: &str) -> String {
	let mut output = String::with_capacity(content.len());
	let mut rest = content;

	while let Some(start) = rest.find("<!--") {
		let after_open = &rest[start + 4..];
		let Some(end) = after_open.find("-->") else {
			break;
		};

		let close = start + 4 + end + 3;
		if after_open.starts_with("[if") {
			output.push_str(&rest[..close]);
		} else {
			output.push_str(&rest[..start]);
		}
		rest = &rest[close..];
	}

	output.push_str(rest);
	output
}

/// Escape backticks so the body stays inside its JavaScript template
/// literal. `${...}` placeholders are left alone.
pub fn escape_backticks(content: &str) -> String {
	content.replace('`', "\\`")
}

/// Render the bundled template module.
///
/// When `locales_module` is given the module imports it and exposes the
/// current locale's strings as `lang` to every template.
pub fn render_templates_module(
	templates: &[CompiledTemplate],
	locales_module: Option<&str>,
) -> CbtResult<String> {
	let mut first_origin: HashMap<&str, &str> = HashMap::new();
	let mut imports: Vec<&str> = Vec::new();
	let mut cases = String::new();

	for template in templates {
		if let Some(first) = first_origin.insert(&template.key, &template.origin) {
			return Err(CbtError::DuplicateTemplateName {
				name: template.key.clone(),
				first: first.to_string(),
				second: template.origin.clone(),
			});
		}

		for statement in &template.imports {
			if !imports.contains(&statement.as_str()) {
				imports.push(statement);
			}
		}

		cases.push_str(&format!(
			"    // Included template file: ./{}\n    case '{}':\n      return `{}`;\n\n",
			template.origin, template.key, template.body
		));
	}

	let mut output = String::from(GENERATED_HEADER);
	if !imports.is_empty() {
		output.push_str(&imports.join("\n"));
		output.push_str("\n\n");
	}

	if let Some(module) = locales_module {
		output.push_str(&format!(
			"import locales from './{module}';\nconst lang = locales();\n\n"
		));
	}

	output.push_str(&format!(
		"function dom(key, data) {{
  var el = document.createElement('template');
  el.innerHTML = str(key, data);
  return el.content;
}}

function str(key, data) {{
  switch (key) {{
{cases}    default:
      return '';
  }}
}}

export default {{dom, str}};
"
	));

	Ok(output)
}
