//! Multipart payload for `POST /api/v1/content`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::submission` decides *which* fields are sent; this module only holds
//! the ordered field list and, in the browser, turns it into a `FormData`.
//! Field order is preserved so repeated `images` parts keep the staging order.

#[cfg(test)]
#[path = "form_data_test.rs"]
mod form_data_test;

/// One multipart field.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart<F> {
    Text { name: &'static str, value: String },
    File { name: &'static str, file: F, file_name: String },
}

impl<F> FormPart<F> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Ordered multipart fields for a content submission.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentSubmission<F> {
    parts: Vec<FormPart<F>>,
}

impl<F> Default for ContentSubmission<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F> ContentSubmission<F> {
    pub(crate) fn push_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.parts.push(FormPart::Text { name, value: value.into() });
    }

    pub(crate) fn push_file(&mut self, name: &'static str, file: F, file_name: impl Into<String>) {
        self.parts.push(FormPart::File { name, file, file_name: file_name.into() });
    }

    #[must_use]
    pub fn parts(&self) -> &[FormPart<F>] {
        &self.parts
    }

    /// First text value for `name`.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if *n == name => Some(value.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.parts.iter().any(|part| part.name() == name)
    }

    /// File parts for `name`, in submission order.
    pub fn files<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (&'a F, &'a str)> + 'a {
        self.parts.iter().filter_map(move |part| match part {
            FormPart::File { name: n, file, file_name } if *n == name => Some((file, file_name.as_str())),
            _ => None,
        })
    }
}

#[cfg(feature = "hydrate")]
impl ContentSubmission<web_sys::File> {
    /// Build a browser `FormData`; the browser picks the multipart boundary.
    pub fn to_form_data(&self) -> Result<web_sys::FormData, String> {
        let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
        for part in &self.parts {
            match part {
                FormPart::Text { name, value } => form.append_with_str(name, value),
                FormPart::File { name, file, file_name } => form.append_with_blob_and_filename(name, file, file_name),
            }
            .map_err(|e| format!("{e:?}"))?;
        }
        Ok(form)
    }
}
