use contracts::domain::string_concepts::ConceptsResponse;

/// Целое слагаемое демонстрации неявного приведения типов
pub const INPUT_NUM_ONE: i32 = 12;
/// Дробное слагаемое
pub const INPUT_NUM_TWO: f64 = 2.5;

/// Собрать демонстрационный ответ для `GET /stringconcepts`
pub fn build_response(sample_name: &str) -> ConceptsResponse {
    ConceptsResponse {
        implicit_result: implicit_sum(INPUT_NUM_ONE, INPUT_NUM_TWO),
        name: name_fragment(sample_name),
    }
}

/// Integer operand is widened to f64 before the addition.
pub fn implicit_sum(whole: i32, fraction: f64) -> f64 {
    f64::from(whole) + fraction
}

/// Символы с `len-4` по `len-2` (не включая), границы обрезаются до нуля,
/// как у среза с отрицательными индексами.
pub fn name_fragment(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let len = chars.len();
    let start = len.saturating_sub(4);
    let end = len.saturating_sub(2);
    if start >= end {
        return String::new();
    }
    chars[start..end].iter().collect()
}
