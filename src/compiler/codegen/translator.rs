use std::rc::Rc;

use log::debug;

use crate::compiler::config::Config;
use crate::compiler::context::Context;
use crate::compiler::symbol::Offset;
use crate::compiler::syntax::ast::crumb::Declaration;
use crate::compiler::syntax::ast::crumb::Identifier;
use crate::compiler::syntax::ast::crumb::Variable;
use crate::compiler::syntax::ast::expression::Expression;
use crate::compiler::syntax::ast::operator::Binary;
use crate::compiler::syntax::ast::operator::Compound;
use crate::compiler::syntax::ast::operator::Unary;
use crate::compiler::syntax::ast::statement::IfDetail;
use crate::compiler::syntax::ast::statement::Statement;
use crate::compiler::syntax::ast::ty::DataType;
use crate::compiler::syntax::ast::Program;
use crate::define_id_generator;
use crate::util::common::Array;
use crate::CompileResult;

use super::emitter::CodeBuffer;
use super::emitter::Emitter;
use super::encoder::encode_float_literal;
use super::encoder::encode_integer_as_float;
use super::encoder::encode_integer_literal;
use super::encoder::encode_load_halfword;
use super::encoder::encode_negated_integer_literal;
use super::err::CodegenError;
use super::opcode::Opcode;

define_id_generator!(unit);

/// Lowers one compilation unit into instruction words in a single pass.
pub struct Translator {
    unit_id: u32,
    emitter: Emitter,
}

fn variable_offset(context: &Context, identifier: &Identifier) -> CompileResult<Offset> {
    context.symbol_table.lookup(identifier)?.placed_offset()
}

impl Translator {
    #[must_use]
    pub fn new(config: &Config) -> Translator {
        Translator {
            unit_id: next_unit_id(),
            emitter: Emitter::new(config.base_address),
        }
    }

    fn translate_declare_statement(
        &mut self,
        context: &mut Context,
        declarations: &Array<Declaration>,
    ) -> CompileResult<()> {
        let mut variables = Vec::new();
        declarations
            .iter()
            .for_each(|declaration| declaration.flatten(&mut variables));
        let offsets = variables
            .into_iter()
            .map(|Variable(identifier, data_type, position)| {
                if !data_type.is_scalar() {
                    let kind = match data_type.as_ref() {
                        DataType::Record { .. } => "record declaration",
                        _ => "array declaration",
                    };
                    debug!("unit {}: {identifier} at {position} is not a scalar", self.unit_id);
                    return Err(CodegenError::UnsupportedNodeKind(kind).into());
                }
                context
                    .symbol_table
                    .declare(identifier.clone(), data_type.clone());
                context.symbol_table.allocate(identifier.clone())
            })
            .collect::<CompileResult<Vec<_>>>()?;
        debug!("unit {}: declared {} cells", self.unit_id, offsets.len());

        let count = u32::try_from(offsets.len()).unwrap_or(u32::MAX);
        self.emitter.emit_with_operand(Opcode::Alloc, count)?;
        offsets
            .into_iter()
            .try_for_each(|offset| self.translate_default_initialization(context, offset))
    }

    /// Stores zero of the declared type into a freshly allocated cell. The type
    /// is recovered from the offset alone.
    fn translate_default_initialization(&mut self, context: &mut Context, offset: Offset) -> CompileResult<()> {
        let entry = context.symbol_table.lookup_by_offset(offset)?;
        let name = entry.name.clone();
        let data_type = entry.data_type();

        self.emitter.emit_with_operand(Opcode::LoadAddress1, offset)?;
        self.emitter.emit_all(encode_load_halfword(0)?);
        if *data_type == DataType::Float {
            self.emitter.emit_opcode(Opcode::ToFloat);
        }
        self.emitter.emit_opcode(Opcode::Store);
        context.symbol_table.mark_initialized(&name)
    }

    fn translate_assign_statement(
        &mut self,
        context: &mut Context,
        identifier: &Rc<Identifier>,
        expression: &Rc<Expression>,
    ) -> CompileResult<()> {
        let offset = variable_offset(context, identifier)?;
        let data_type = context.symbol_table.lookup_by_offset(offset)?.data_type();

        self.emitter.emit_with_operand(Opcode::LoadAddress1, offset)?;
        self.translate_typed_expression(context, expression, &data_type)?;
        self.emitter.emit_opcode(Opcode::Store);
        context.symbol_table.mark_initialized(identifier)
    }

    fn translate_compound_assign_statement(
        &mut self,
        context: &mut Context,
        operator: Compound,
        identifier: &Rc<Identifier>,
        expression: &Rc<Expression>,
    ) -> CompileResult<()> {
        let offset = variable_offset(context, identifier)?;
        let data_type = context.symbol_table.lookup_by_offset(offset)?.data_type();

        self.emitter.emit_with_operand(Opcode::LoadAddress1, offset)?;
        self.emitter.emit_with_operand(Opcode::LoadValue1, offset)?;
        self.translate_typed_expression(context, expression, &data_type)?;
        self.emitter.emit_opcode(Opcode::from(operator));
        self.emitter.emit_opcode(Opcode::Store);
        Ok(())
    }

    fn translate_input_statement(&mut self, context: &mut Context, identifier: &Rc<Identifier>) -> CompileResult<()> {
        let offset = variable_offset(context, identifier)?;
        let read = match context.symbol_table.lookup_by_offset(offset)?.data_type().as_ref() {
            DataType::Float => Opcode::ReadFloat,
            _ => Opcode::ReadInteger,
        };

        self.emitter.emit_with_operand(Opcode::LoadAddress1, offset)?;
        self.emitter.emit_opcode(read);
        self.emitter.emit_opcode(Opcode::Store);
        context.symbol_table.mark_initialized(identifier)
    }

    fn translate_print_statement(&mut self, context: &Context, expression: &Rc<Expression>) -> CompileResult<()> {
        self.translate_expression(context, expression)?;
        self.emitter.emit_opcode(Opcode::PrintValue);
        self.emitter.emit_opcode(Opcode::NewLine);
        Ok(())
    }

    /// source code example:
    /// ```plain_text
    /// if condition {
    ///     do_something
    /// }
    /// ```
    ///
    /// translation:
    /// ```plain_text
    ///     LV0 <end>           ; operand holds its own address until patched
    ///     condition_words
    ///     BF
    ///     do_something_words
    /// end:
    /// ```
    fn translate_if_statement(&mut self, context: &mut Context, if_detail: &IfDetail) -> CompileResult<()> {
        let IfDetail {
            condition,
            true_body,
            false_body,
        } = if_detail;
        if false_body.is_some() {
            return Err(CodegenError::UnsupportedNodeKind("else").into());
        }

        let end = self.emitter.emit_placeholder(Opcode::LoadValue0)?;
        self.translate_expression(context, condition)?;
        self.emitter.emit_opcode(Opcode::BranchFalse);
        self.translate_statement(context, true_body)?;
        let target = self.emitter.pc();
        self.emitter.resolve(end, target)
    }

    fn translate_statement(&mut self, context: &mut Context, statement: &Statement) -> CompileResult<()> {
        match statement {
            Statement::Declare(declarations) => self.translate_declare_statement(context, declarations),
            Statement::Assign(identifier, expression) => {
                self.translate_assign_statement(context, identifier, expression)
            }
            Statement::CompoundAssign(operator, identifier, expression) => {
                self.translate_compound_assign_statement(context, *operator, identifier, expression)
            }
            Statement::Input(identifier) => self.translate_input_statement(context, identifier),
            Statement::Print(expression) => self.translate_print_statement(context, expression),
            Statement::If(if_detail) => self.translate_if_statement(context, if_detail),
            Statement::Block(statements) => statements
                .iter()
                .try_for_each(|statement| self.translate_statement(context, statement)),
        }
    }

    /// Integer literals flowing into a float slot are pushed as floats, also
    /// underneath a negation.
    fn translate_typed_expression(
        &mut self,
        context: &Context,
        expression: &Expression,
        data_type: &DataType,
    ) -> CompileResult<()> {
        match (expression, data_type) {
            (Expression::IntLiteral(literal), DataType::Float) => {
                self.emitter.emit_all(encode_integer_as_float(literal)?);
                Ok(())
            }
            (Expression::Unary(operator, operand), _) => {
                self.translate_unary_expression(context, *operator, operand, Some(data_type))
            }
            _ => self.translate_expression(context, expression),
        }
    }

    /// `-e` is `0 - e`, except that a negated integer literal is a single
    /// halfword load.
    fn translate_unary_expression(
        &mut self,
        context: &Context,
        operator: Unary,
        expression: &Expression,
        data_type: Option<&DataType>,
    ) -> CompileResult<()> {
        let float = matches!(data_type, Some(DataType::Float));
        match (operator, expression) {
            (Unary::LogicalNot, _) => {
                self.translate_expression(context, expression)?;
                self.emitter.emit_opcode(Opcode::Not);
            }
            (Unary::Negative, Expression::IntLiteral(literal)) => {
                self.emitter.emit_all(encode_negated_integer_literal(literal)?);
                if float {
                    self.emitter.emit_opcode(Opcode::ToFloat);
                }
            }
            (Unary::Negative, _) => {
                self.emitter.emit_all(encode_load_halfword(0)?);
                if float {
                    self.emitter.emit_opcode(Opcode::ToFloat);
                }
                match data_type {
                    Some(data_type) => self.translate_typed_expression(context, expression, data_type)?,
                    None => self.translate_expression(context, expression)?,
                }
                self.emitter.emit_opcode(Opcode::Subtract);
            }
        }
        Ok(())
    }

    /// Comparisons compute `left - right` and test the difference.
    fn translate_binary_expression(
        &mut self,
        context: &Context,
        operator: Binary,
        data_type: &DataType,
        left: &Expression,
        right: &Expression,
    ) -> CompileResult<()> {
        self.translate_typed_expression(context, left, data_type)?;
        self.translate_typed_expression(context, right, data_type)?;
        if operator.is_comparison() {
            self.emitter.emit_opcode(Opcode::Subtract);
        }
        self.emitter.emit_opcode(Opcode::from(operator));
        Ok(())
    }

    fn translate_expression(&mut self, context: &Context, expression: &Expression) -> CompileResult<()> {
        match expression {
            Expression::Identifier(identifier) => {
                let offset = variable_offset(context, identifier)?;
                self.emitter.emit_with_operand(Opcode::LoadValue1, offset)?;
            }
            Expression::IntLiteral(literal) => self.emitter.emit_all(encode_integer_literal(literal)?),
            Expression::FloatLiteral(literal) => self.emitter.emit_all(encode_float_literal(literal)?),
            Expression::BoolLiteral(literal) => {
                self.emitter
                    .emit_opcode(if *literal { Opcode::True } else { Opcode::False });
            }
            Expression::Unary(operator, expression) => {
                self.translate_unary_expression(context, *operator, expression, None)?;
            }
            Expression::Binary(operator, data_type, left, right) => {
                self.translate_binary_expression(context, *operator, data_type, left, right)?;
            }
            Expression::Call(..) | Expression::Index(..) => {
                return Err(CodegenError::UnsupportedNodeKind(expression.kind()).into());
            }
        }
        Ok(())
    }

    /// # Errors
    pub fn translate(mut self, context: &mut Context, program: &Program) -> CompileResult<CodeBuffer> {
        debug!("unit {}: translating\n{program}", self.unit_id);
        program
            .statements
            .iter()
            .try_for_each(|statement| self.translate_statement(context, statement))?;
        let buffer = self.emitter.finish()?;
        debug!("unit {}: emitted {} words", self.unit_id, buffer.len());
        Ok(buffer)
    }
}
