use crate::domain::model::PredictionResult;
use crate::utils::format::format_currency;

pub const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>House Price Prediction</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="bg-light">
    <div class="container mt-5">
        <div class="card shadow-lg p-4 rounded-4">
            <h2 class="text-center text-primary mb-4">🏠 House Price Prediction</h2>
            <form action="/predict_form" method="post">
                <div class="mb-3">
                    <label class="form-label" for="area">Area (sqft)</label>
                    <input type="number" step="any" class="form-control" id="area" name="area" required>
                </div>
                <div class="mb-3">
                    <label class="form-label" for="bedrooms">Bedrooms</label>
                    <input type="number" min="0" step="1" class="form-control" id="bedrooms" name="bedrooms" required>
                </div>
                <div class="mb-3">
                    <label class="form-label" for="age">Age (years)</label>
                    <input type="number" min="0" step="1" class="form-control" id="age" name="age" required>
                </div>
                <button type="submit" class="btn btn-primary w-100">Predict Price</button>
            </form>
        </div>
    </div>
</body>
</html>
"#;

/// Result page with the formatted price and the inline PNG chart.
pub fn render_result_page(result: &PredictionResult, chart_base64: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Prediction Result</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="bg-light">
    <div class="container mt-5">
        <div class="card shadow-lg p-4 rounded-4 text-center">
            <h2 class="text-success">✅ Prediction Result</h2>
            <p class="fs-4">Estimated House Price: <b>{price}</b></p>
            <img src="data:image/png;base64,{chart}" class="img-fluid rounded mt-3" alt="Chart">
            <a href="/" class="btn btn-secondary mt-3">🔙 Back</a>
        </div>
    </div>
</body>
</html>
"#,
        price = format_currency(result.price),
        chart = chart_base64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_page_fields() {
        for field in ["name=\"area\"", "name=\"bedrooms\"", "name=\"age\""] {
            assert!(FORM_PAGE.contains(field), "missing {field}");
        }
        assert!(FORM_PAGE.contains(r#"action="/predict_form" method="post""#));
        assert_eq!(FORM_PAGE.matches("required").count(), 3);
    }

    #[test]
    fn test_result_page_contents() {
        let page = render_result_page(&PredictionResult { price: 628715.7 }, "iVBORw0KGgo=");

        assert!(page.contains("<b>$628,715.70</b>"));
        assert!(page.contains(r#"src="data:image/png;base64,iVBORw0KGgo=""#));
        assert!(page.contains(r#"<a href="/""#));
    }
}
