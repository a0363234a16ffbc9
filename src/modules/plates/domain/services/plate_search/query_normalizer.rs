use crate::modules::plates::domain::value_objects::NormalizedQuery;

/// Transformation that can be applied to a query or a plate field
///
/// Each transformation is composable and testable in isolation.
pub trait TextTransformation: Send + Sync {
    fn transform(&self, text: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Strips leading and trailing whitespace
#[derive(Debug, Clone)]
pub struct TrimTransform;

impl TextTransformation for TrimTransform {
    fn transform(&self, text: &str) -> String {
        text.trim().to_string()
    }

    fn name(&self) -> &'static str {
        "Trim"
    }
}

/// Replaces German umlauts and eszett with their ASCII digraphs
///
/// Runs before lowercasing, so "Ö" becomes "Oe" and folds to "oe" afterwards.
#[derive(Debug, Clone)]
pub struct TransliterateUmlautsTransform;

impl TextTransformation for TransliterateUmlautsTransform {
    fn transform(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() + 4);
        for c in text.chars() {
            match c {
                'ä' => result.push_str("ae"),
                'ö' => result.push_str("oe"),
                'ü' => result.push_str("ue"),
                'ß' => result.push_str("ss"),
                'Ä' => result.push_str("Ae"),
                'Ö' => result.push_str("Oe"),
                'Ü' => result.push_str("Ue"),
                other => result.push(other),
            }
        }
        result
    }

    fn name(&self) -> &'static str {
        "TransliterateUmlauts"
    }
}

/// Collapses every run of whitespace into a single space
#[derive(Debug, Clone)]
pub struct CollapseWhitespaceTransform;

impl TextTransformation for CollapseWhitespaceTransform {
    fn transform(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut in_whitespace = false;
        for c in text.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    result.push(' ');
                }
                in_whitespace = true;
            } else {
                result.push(c);
                in_whitespace = false;
            }
        }
        result
    }

    fn name(&self) -> &'static str {
        "CollapseWhitespace"
    }
}

/// Converts text to lowercase
#[derive(Debug, Clone)]
pub struct LowercaseTransform;

impl TextTransformation for LowercaseTransform {
    fn transform(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "Lowercase"
    }
}

/// Normalizer that applies a pipeline of transformations
///
/// The same normalizer must be applied to the query and to every plate field before
/// they are compared.
pub struct QueryNormalizer {
    transformations: Vec<Box<dyn TextTransformation>>,
}

impl QueryNormalizer {
    /// Create a new empty normalizer
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// Trim, transliterate umlauts, collapse whitespace, lowercase, in that order
    pub fn standard() -> Self {
        Self::new()
            .with_trim()
            .with_transliterate_umlauts()
            .with_collapse_whitespace()
            .with_lowercase()
    }

    pub fn with_trim(mut self) -> Self {
        self.transformations.push(Box::new(TrimTransform));
        self
    }

    pub fn with_transliterate_umlauts(mut self) -> Self {
        self.transformations
            .push(Box::new(TransliterateUmlautsTransform));
        self
    }

    pub fn with_collapse_whitespace(mut self) -> Self {
        self.transformations
            .push(Box::new(CollapseWhitespaceTransform));
        self
    }

    pub fn with_lowercase(mut self) -> Self {
        self.transformations.push(Box::new(LowercaseTransform));
        self
    }

    /// Apply all transformations to the text
    pub fn normalize(&self, text: &str) -> String {
        let mut result = text.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    pub fn normalize_query(&self, raw: &str) -> NormalizedQuery {
        NormalizedQuery::new(self.normalize(raw))
    }

    /// Get the number of transformations in the pipeline
    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::standard()
    }
}
