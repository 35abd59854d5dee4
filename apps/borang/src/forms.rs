//! Field tables for the form steps.
//!
//! These describe what the renderer paints: labels, placeholders, radio
//! option lists, and the advisory required markers. None of it is enforced
//! by the core; an application can be submitted with any of these empty.

use borang_core::{BagName, FieldStore};

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Radio(&'static [&'static str]),
    Checkbox,
}

/// One row of a form step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Advisory marker only; never enforced.
    pub required: bool,
    pub kind: FieldKind,
    pub hint: Option<&'static str>,
}

impl FieldSpec {
    const fn text(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            placeholder,
            required: false,
            kind: FieldKind::Text,
            hint: None,
        }
    }

    const fn radio(key: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            key,
            label,
            placeholder: "",
            required: false,
            kind: FieldKind::Radio(options),
            hint: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }
}

/// Applicant and spouse share the same field table; only the target bag
/// differs.
pub const PERSON_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("nama", "Nama", "Nama penuh").required(),
    FieldSpec::text("noKP", "No. Kad Pengenalan", "XXXXXXXXXXXXXX").required(),
    FieldSpec::text("noTel", "No. Telefon", "+60XXXXXXXX").required(),
    FieldSpec::text("umur", "Umur", "Umur"),
    FieldSpec::text("jawatan", "Nama Jawatan", "Contoh: Jurutera").required(),
    FieldSpec::text("jabatan", "Nama Jabatan / Syarikat", "Nama syarikat atau jabatan").required(),
    FieldSpec::text("alamatKerja1", "Alamat Tempat Kerja (Baris 1)", "No. jalan, nama jalan")
        .required(),
    FieldSpec::text("alamatKerja2", "Alamat Tempat Kerja (Baris 2)", "Bandar, poskod, negeri"),
    FieldSpec::text("pendapatan", "Pendapatan", "RM XXXX").required(),
    FieldSpec::text("noTelPejabat", "No. Telefon Pejabat", "+603XXXXXXXX").required(),
    FieldSpec::radio(
        "kewarganegaraan",
        "Kewarganegaraan",
        &["Warganegara", "Bukan Warganegara"],
    ),
    FieldSpec::radio("jantina", "Jantina", &["Lelaki", "Perempuan"]),
    FieldSpec::radio("bangsa", "Bangsa", &["Bumiputera", "Bukan Bumiputera"]),
];

pub const ADDITIONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("alamatSurat", "Alamat Surat-Menyurat", "Alamat lengkap"),
    FieldSpec::text("tanggungan", "Senarai Tanggungan", "Senaraikan tanggungan di sini...")
        .with_hint("Format: Nama - No. KP - Hubungan. Contoh: 1. Ahmad Bin Ali - 150101XXXXXX - Anak"),
    FieldSpec::radio(
        "tarafKahwin",
        "Taraf Perkahwinan",
        &[
            "Berkahwin",
            "Duda / Janda / Balu Menanggung Anak",
            "Tidak Berkahwin Tetapi Mempunyai Keluarga",
        ],
    ),
    FieldSpec::radio(
        "tempatTinggal",
        "Tempat Tinggal Sekarang",
        &[
            "Rumah Sewa",
            "Rumah Keluarga",
            "Rumah Majikan",
            "Rumah Sendiri",
            "Tumpang",
            "Kuaters Kerajaan",
        ],
    ),
    FieldSpec::text("lokasiTinggal", "Lokasi Tempat Tinggal Sekarang", "Bandar / kawasan"),
    FieldSpec::radio(
        "statusOKU",
        "Status OKU",
        &[
            "Kecacatan Fizikal (Terlantar / Berkerusi Roda)",
            "Kecacatan Lain (Boleh Berjalan)",
            "Tidak berkenaan",
        ],
    ),
    FieldSpec::radio(
        "pemilikanRumah",
        "Pemilikan Rumah",
        &[
            "Telah memiliki rumah",
            "Telah Memiliki Rumah Tetapi Dalam Proses Pembinaan",
            "Belum Memiliki Rumah",
        ],
    ),
    FieldSpec::text(
        "lokasiRumahMilik",
        "Lokasi Rumah & Tarikh Jangkaan Siap",
        "Lokasi dan tarikh jangkaan siap (jika berkenaan)",
    ),
    FieldSpec {
        key: "akuan",
        label: "Akuan Pemohon",
        placeholder: "",
        required: true,
        kind: FieldKind::Checkbox,
        hint: Some("Ya, saya bersetuju dengan akuan di atas"),
    },
];

/// Declaration shown above the akuan checkbox.
pub const DECLARATION: &str = "Saya mengaku bahawa semua maklumat yang diberikan adalah benar. \
Saya juga bersetuju dan faham bahawa permohonan yang mengandungi maklumat palsu atau tidak \
lengkap berhak untuk tidak diluluskan atau tidak diproses.";

/// Mandatory attachments shown on the documents step.
pub const REQUIRED_DOCUMENTS: &[&str] = &[
    "Salinan Kad Pengenalan",
    "Pengesahan Pekerjaan",
    "Pengesahan Status Perkahwinan",
    "Dokumen Tambahan",
];

/// The home-location detail only applies when the applicant already owns (or
/// is building) a home.
pub fn owns_home(pemilikan: &str) -> bool {
    pemilikan == "Telah memiliki rumah"
        || pemilikan == "Telah Memiliki Rumah Tetapi Dalam Proses Pembinaan"
}

/// The additional-info rows currently visible, honoring the conditional
/// `lokasiRumahMilik` field.
pub fn visible_additional_fields(fields: &FieldStore) -> Vec<&'static FieldSpec> {
    let pemilikan = fields.text(BagName::Additional, "pemilikanRumah");
    ADDITIONAL_FIELDS
        .iter()
        .filter(|spec| spec.key != "lokasiRumahMilik" || owns_home(pemilikan))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_table_matches_form() {
        assert_eq!(PERSON_FIELDS.len(), 13);
        assert!(PERSON_FIELDS.iter().any(|f| f.key == "nama" && f.required));
        assert!(PERSON_FIELDS
            .iter()
            .any(|f| f.key == "alamatKerja2" && !f.required));
    }

    #[test]
    fn test_conditional_home_location_field() {
        let mut fields = FieldStore::new();
        assert!(visible_additional_fields(&fields)
            .iter()
            .all(|f| f.key != "lokasiRumahMilik"));

        fields.update_field(BagName::Additional, "pemilikanRumah", "Telah memiliki rumah");
        assert!(visible_additional_fields(&fields)
            .iter()
            .any(|f| f.key == "lokasiRumahMilik"));

        fields.update_field(
            BagName::Additional,
            "pemilikanRumah",
            "Belum Memiliki Rumah",
        );
        assert!(visible_additional_fields(&fields)
            .iter()
            .all(|f| f.key != "lokasiRumahMilik"));
    }

    #[test]
    fn test_owns_home_variants() {
        assert!(owns_home("Telah memiliki rumah"));
        assert!(owns_home(
            "Telah Memiliki Rumah Tetapi Dalam Proses Pembinaan"
        ));
        assert!(!owns_home("Belum Memiliki Rumah"));
        assert!(!owns_home(""));
    }
}
