use crate::routes::HitView;

pub fn escape_html(text: &str) -> String {
	text.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#39;")
}

/// Renders the search form, plus results when a query was submitted.
pub fn search_page(query: Option<&str>, hits: &[HitView], enrichment: Option<&str>) -> String {
	let mut body = String::new();

	body.push_str("<form method=\"post\" action=\"/\">\n");
	body.push_str(&format!(
		"<input type=\"text\" name=\"search_query\" value=\"{}\" autofocus>\n",
		escape_html(query.unwrap_or_default())
	));
	body.push_str("<button type=\"submit\">Search</button>\n</form>\n");

	if let Some(query) = query {
		if hits.is_empty() {
			body.push_str(&format!("<p>No results for {}.</p>\n", escape_html(query)));
		} else {
			body.push_str("<table>\n<tr>");

			for heading in ["#", "Key", "Weight", "Score", "Description"] {
				body.push_str(&format!("<th>{heading}</th>"));
			}

			body.push_str("</tr>\n");

			for (position, hit) in hits.iter().enumerate() {
				body.push_str(&format!(
					"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
					position + 1,
					escape_html(&hit.key),
					hit.weight,
					hit.score,
					escape_html(&hit.description)
				));
			}

			body.push_str("</table>\n");
		}
	}
	if let Some(enrichment) = enrichment {
		body.push_str(&format!(
			"<section class=\"enrichment\">\n<h2>Encyclopedia</h2>\n<p>{}</p>\n</section>\n",
			escape_html(enrichment)
		));
	}

	format!(
		"<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n\
		 <title>kbase</title>\n</head>\n<body>\n<h1>kbase</h1>\n{body}</body>\n</html>\n"
	)
}
