/// Outcome of one download from the API.
///
/// Lets callers tell "the API answered with nothing" apart from "the request failed"
/// instead of collapsing both into a placeholder record.
#[derive(Debug, Clone, PartialEq)]
pub enum Descarga<T> {
    /// The request succeeded and produced a value.
    Datos(T),
    /// The request succeeded but the payload held no records, or nothing usable.
    Vacio,
    /// Transport error, non-OK status or undecodable body.
    Fallo(String),
}

impl<T> Descarga<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Descarga<U> {
        match self {
            Descarga::Datos(valor) => Descarga::Datos(f(valor)),
            Descarga::Vacio => Descarga::Vacio,
            Descarga::Fallo(razon) => Descarga::Fallo(razon),
        }
    }

    pub fn datos(self) -> Option<T> {
        match self {
            Descarga::Datos(valor) => Some(valor),
            _ => None,
        }
    }
}

impl<T> Descarga<Vec<T>> {
    /// `Vacio` for an empty list, `Datos` otherwise.
    pub fn desde_lista(lista: Vec<T>) -> Self {
        if lista.is_empty() {
            Descarga::Vacio
        } else {
            Descarga::Datos(lista)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_reported_as_empty() {
        assert_eq!(Descarga::<Vec<u8>>::desde_lista(vec![]), Descarga::Vacio);
        assert_eq!(Descarga::desde_lista(vec![1]), Descarga::Datos(vec![1]));
    }

    #[test]
    fn map_preserves_failures() {
        let fallo: Descarga<u8> = Descarga::Fallo("timeout".to_string());
        assert_eq!(fallo.map(|v| v + 1), Descarga::Fallo("timeout".to_string()));
        assert_eq!(Descarga::Datos(1).map(|v| v + 1).datos(), Some(2));
    }
}
