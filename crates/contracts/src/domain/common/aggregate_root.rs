use super::EntityMetadata;

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // Методы экземпляра (данные конкретной записи)

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить бизнес-код записи (например, "BOM-2026-001")
    fn code(&self) -> &str;

    /// Получить описание/название записи
    fn description(&self) -> &str;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    /// Получить изменяемые метаданные
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // Метаданные класса агрегата (статические данные)

    /// Индекс агрегата в системе (например, "a004")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для БД (например, "bom")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Спецификация")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Спецификации")
    fn list_name() -> &'static str;
}
